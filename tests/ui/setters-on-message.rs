#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Target {
    #[prost(oneof = "target::Address", tags = "1, 2")]
    address: Option<target::Address>,
}

pub mod target {
    use schedule_transmission::OneofAccessors;

    #[derive(Clone, PartialEq, ::prost::Oneof, OneofAccessors)]
    #[accessors(message = "super::Target", field = "address", case = "AddressCase")]
    pub enum Address {
        #[prost(string, tag = "1")]
        Hostname(String),
        #[prost(uint32, tag = "2")]
        Ipv4(u32),
    }
}

fn main() {
    use target::AddressCase;

    let mut target = Target::default();
    assert_eq!(target.address_case(), AddressCase::None);
    assert_eq!(target.hostname(), "");
    assert_eq!(*target.ipv4(), 0);

    target.set_hostname("localhost".to_string());
    assert_eq!(target.address_case(), AddressCase::Hostname);
    assert_eq!(target.hostname_or_none().map(String::as_str), Some("localhost"));

    target.set_ipv4(0x7f00_0001);
    assert!(!target.has_hostname());
    assert_eq!(target.address_case().as_str_name(), "ipv4");

    // Clearing an inactive member does nothing.
    target.clear_hostname();
    assert!(target.has_ipv4());

    target.clear_address();
    assert_eq!(target.address_case(), AddressCase::None);
}
