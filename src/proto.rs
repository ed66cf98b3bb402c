//! Wire types for scheduling a transmission.
//!
//! Each oneof group is an `Option` over a prost `Oneof` enum, so a group
//! holds at most one member by construction. `OneofAccessors` derives the
//! `has_*`, `*_or_none`, `*_case` and setter families on top of that.

use prost::Message as _;
use tracing::debug;

use crate::error::{Error, Result};

/// Requests a transmission: `schedule` decides when, `message` decides what.
///
/// Values are read-only. Use [`ScheduleTransmissionRequest::build`] or
/// [`ScheduleTransmissionRequest::copy`] to produce a new value.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScheduleTransmissionRequest {
    #[prost(oneof = "schedule_transmission_request::Schedule", tags = "1, 2, 3")]
    schedule: ::core::option::Option<schedule_transmission_request::Schedule>,
    #[prost(oneof = "schedule_transmission_request::Message", tags = "4")]
    message: ::core::option::Option<schedule_transmission_request::Message>,
}

/// Nested message and enum types in `ScheduleTransmissionRequest`.
pub mod schedule_transmission_request {
    use schedule_transmission_derive::OneofAccessors;

    #[derive(Clone, PartialEq, ::prost::Oneof, OneofAccessors)]
    #[accessors(
        message = "super::ScheduleTransmissionRequest",
        builder = "crate::ScheduleTransmissionRequestBuilder",
        field = "schedule",
        case = "ScheduleCase"
    )]
    pub enum Schedule {
        #[prost(message, tag = "1")]
        Delayed(super::Delayed),
        #[prost(message, tag = "2")]
        Interval(super::Interval),
        #[prost(message, tag = "3")]
        Cron(super::Cron),
    }

    // More event sources are expected to join this group.
    #[derive(Clone, PartialEq, ::prost::Oneof, OneofAccessors)]
    #[accessors(
        message = "super::ScheduleTransmissionRequest",
        builder = "crate::ScheduleTransmissionRequestBuilder",
        field = "message",
        case = "MessageCase",
        non_exhaustive
    )]
    pub enum Message {
        #[prost(message, tag = "4")]
        NatsEvent(super::NatsEvent),
    }
}

impl ScheduleTransmissionRequest {
    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::decode(bytes).map_err(|error| {
            debug!(%error, len = bytes.len(), "failed to decode schedule transmission request");
            Error::Decode(error)
        })
    }
}

/// Transmit once, at `transmit_at`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Delayed {
    #[prost(message, optional, tag = "1")]
    pub transmit_at: ::core::option::Option<::prost_types::Timestamp>,
}

/// Transmit at `first_transmission` and then every `interval`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Interval {
    #[prost(message, optional, tag = "1")]
    pub first_transmission: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "2")]
    pub interval: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "3")]
    pub repeat: ::core::option::Option<Repeat>,
}

/// Transmit on every match of a cron `expression` after
/// `first_transmission_after`. The expression is opaque to this crate.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Cron {
    #[prost(message, optional, tag = "1")]
    pub first_transmission_after: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag = "2")]
    pub expression: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub repeat: ::core::option::Option<Repeat>,
}

/// How many times a recurring schedule fires.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Repeat {
    #[prost(oneof = "repeat::Kind", tags = "1, 2")]
    kind: ::core::option::Option<repeat::Kind>,
}

/// Nested message and enum types in `Repeat`.
pub mod repeat {
    use schedule_transmission_derive::OneofAccessors;

    #[derive(Clone, Copy, PartialEq, ::prost::Oneof, OneofAccessors)]
    #[accessors(message = "super::Repeat", field = "kind", case = "KindCase")]
    pub enum Kind {
        #[prost(bool, tag = "1")]
        Infinitely(bool),
        #[prost(uint32, tag = "2")]
        Times(u32),
    }
}

impl Repeat {
    pub fn infinite() -> Self {
        let mut repeat = Self::default();
        repeat.set_infinitely(true);
        repeat
    }

    pub fn limited(times: u32) -> Self {
        let mut repeat = Self::default();
        repeat.set_times(times);
        repeat
    }
}

/// Publish `payload` on the NATS `subject` when the schedule fires.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NatsEvent {
    #[prost(string, tag = "1")]
    pub subject: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    pub payload: ::prost::alloc::vec::Vec<u8>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::repeat::KindCase;
    use super::*;

    #[test]
    fn repeat_constructors() {
        let infinite = Repeat::infinite();
        assert_eq!(infinite.kind_case(), KindCase::Infinitely);
        assert!(!infinite.has_times());

        let limited = Repeat::limited(3);
        assert_eq!(limited.kind_case(), KindCase::Times);
        assert_eq!(*limited.times(), 3);
        assert_eq!(limited.infinitely_or_none(), None);
    }

    #[test]
    fn repeat_setters_replace_the_sibling() {
        let mut repeat = Repeat::limited(3);
        repeat.set_infinitely(true);
        assert_eq!(repeat.kind_case(), KindCase::Infinitely);
        assert_eq!(*repeat.times(), 0);

        assert_eq!(repeat.take_times(), None);
        assert_eq!(repeat.take_infinitely(), Some(true));
        assert_eq!(repeat.kind_case(), KindCase::None);
    }

    #[test]
    fn garbage_does_not_decode() {
        let err = ScheduleTransmissionRequest::from_bytes(&[0x0a, 0xff]).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
