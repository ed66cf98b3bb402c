#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Envelope {
    #[prost(oneof = "envelope::Body", tags = "1")]
    body: Option<envelope::Body>,
}

pub mod envelope {
    use schedule_transmission::OneofAccessors;

    #[derive(Clone, PartialEq, ::prost::Oneof, OneofAccessors)]
    #[accessors(message = "super::Envelope", field = "body", case = "BodyCase", non_exhaustive)]
    pub enum Body {
        #[prost(bytes = "vec", tag = "1")]
        Raw(Vec<u8>),
    }
}

fn main() {
    use envelope::BodyCase;

    let mut envelope = Envelope::default();
    assert_eq!(envelope.body_case(), BodyCase::default());
    assert!(envelope.raw().is_empty());

    envelope.set_raw(vec![1, 2, 3]);
    assert_eq!(envelope.take_raw(), Some(vec![1, 2, 3]));
    assert_eq!(envelope.body_case(), BodyCase::None);
}
