#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Probe {
    #[prost(oneof = "probe::Check", tags = "1, 2, 3")]
    check: Option<probe::Check>,
}

pub mod probe {
    use schedule_transmission::OneofAccessors;

    #[derive(Clone, PartialEq, ::prost::Oneof, OneofAccessors)]
    #[accessors(message = "super::Probe", field = "check", case = "CheckCase")]
    pub enum Check {
        #[prost(string, tag = "1")]
        #[accessors(name = "http_path")]
        HTTPGet(String),
        #[prost(uint32, tag = "2")]
        TcpPort(u32),
        #[prost(string, tag = "3")]
        #[accessors(skip)]
        Exec(String),
    }
}

fn main() {
    use probe::{Check, CheckCase};

    let mut probe = Probe::default();
    probe.set_http_path("/healthz".into());
    assert_eq!(probe.check_case(), CheckCase::HTTPGet);
    assert_eq!(probe.check_case().as_str_name(), "http_path");
    assert_eq!(probe.http_path(), "/healthz");

    probe.set_tcp_port(8080);
    assert_eq!(probe.check_case().as_str_name(), "tcp_port");

    // Skipped members have no accessors but still report their case.
    probe.check = Some(Check::Exec("true".into()));
    assert_eq!(probe.check_case(), CheckCase::Exec);
    assert!(!probe.has_tcp_port());
}
