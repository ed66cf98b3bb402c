//! The `ScheduleTransmissionRequest` protocol message.
//!
//! A request picks when to transmit through the `schedule` oneof
//! (`delayed`, `interval` or `cron`) and what to transmit through the
//! `message` oneof (`nats_event`). Requests are read-only values produced by
//! a scoped builder:
//!
//! ```
//! use schedule_transmission::proto::{Cron, NatsEvent, Repeat};
//! use schedule_transmission::{ScheduleCase, ScheduleTransmissionRequest};
//!
//! let request = ScheduleTransmissionRequest::build(|b| {
//!     b.set_cron(Cron {
//!         first_transmission_after: Some(Default::default()),
//!         expression: "0 0 * * * *".into(),
//!         repeat: Some(Repeat::infinite()),
//!     })
//!     .set_nats_event(NatsEvent {
//!         subject: "REPORTS.hourly".into(),
//!         payload: Vec::new(),
//!     });
//! });
//!
//! assert_eq!(request.schedule_case(), ScheduleCase::Cron);
//! assert!(request.delayed_or_none().is_none());
//!
//! let once_more = request.copy(|b| {
//!     b.clear_schedule();
//! });
//! assert_eq!(once_more.schedule_case(), ScheduleCase::None);
//! assert!(once_more.has_nats_event());
//! ```
mod builder;
mod error;
pub mod model;
pub mod proto;

pub use builder::ScheduleTransmissionRequestBuilder;
pub use error::{Error, Result};
pub use proto::schedule_transmission_request::{MessageCase, ScheduleCase};
pub use proto::ScheduleTransmissionRequest;
pub use schedule_transmission_derive::OneofAccessors;
