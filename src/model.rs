//! Validated, strongly typed form of a [`ScheduleTransmissionRequest`].
//!
//! The wire message allows partially filled requests. Converting it into a
//! [`ScheduleTransmission`] checks that every field a consumer needs is
//! present and in range. Converting back always produces a valid request.

use chrono::{DateTime, Duration, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::proto::{self, repeat::KindCase, ScheduleTransmissionRequest};
use crate::{MessageCase, ScheduleCase};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    // The schedule repeats indefinitely.
    Infinitely,
    // Number of transmissions planned, at least one.
    Times(u32),
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delayed {
    pub transmit_at: DateTime<Utc>,
}

impl Delayed {
    pub fn new(transmit_at: DateTime<Utc>) -> Delayed {
        Delayed { transmit_at }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    pub first_transmission: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(with = "duration_parts"))]
    pub interval: Duration,
    pub repeat: Repeat,
}

impl Interval {
    pub fn new(first_transmission: DateTime<Utc>, interval: Duration, repeat: Repeat) -> Interval {
        Interval {
            first_transmission,
            interval,
            repeat,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cron {
    pub first_transmission_after: DateTime<Utc>,
    // Carried verbatim, never evaluated here.
    pub expression: String,
    pub repeat: Repeat,
}

impl Cron {
    pub fn new(
        first_transmission_after: DateTime<Utc>,
        expression: impl Into<String>,
        repeat: Repeat,
    ) -> Cron {
        Cron {
            first_transmission_after,
            expression: expression.into(),
            repeat,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchedulePattern {
    Delayed(Delayed),
    Interval(Interval),
    Cron(Cron),
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NatsEvent {
    pub subject: String,
    pub payload: Vec<u8>,
}

impl NatsEvent {
    pub fn new(subject: impl Into<String>, payload: impl Into<Vec<u8>>) -> NatsEvent {
        NatsEvent {
            subject: subject.into(),
            payload: payload.into(),
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Message {
    NatsEvent(NatsEvent),
}

/// A request that passed validation: when to transmit, and what.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleTransmission {
    pub schedule: SchedulePattern,
    pub message: Message,
}

impl TryFrom<&ScheduleTransmissionRequest> for ScheduleTransmission {
    type Error = Error;

    fn try_from(request: &ScheduleTransmissionRequest) -> Result<Self> {
        let schedule_case = request.schedule_case().as_str_name();
        let message_case = request.message_case().as_str_name();

        let converted = schedule_pattern(request).and_then(|schedule| {
            Ok(ScheduleTransmission {
                schedule,
                message: message_of(request)?,
            })
        });
        match &converted {
            Ok(_) => trace!(schedule_case, message_case, "accepted schedule transmission request"),
            Err(error) => debug!(
                %error,
                schedule_case,
                message_case,
                "rejected schedule transmission request"
            ),
        }
        converted
    }
}

impl TryFrom<ScheduleTransmissionRequest> for ScheduleTransmission {
    type Error = Error;

    fn try_from(request: ScheduleTransmissionRequest) -> Result<Self> {
        ScheduleTransmission::try_from(&request)
    }
}

impl From<&ScheduleTransmission> for ScheduleTransmissionRequest {
    fn from(transmission: &ScheduleTransmission) -> Self {
        ScheduleTransmissionRequest::build(|b| {
            match &transmission.schedule {
                SchedulePattern::Delayed(delayed) => b.set_delayed(delayed.into()),
                SchedulePattern::Interval(interval) => b.set_interval(interval.into()),
                SchedulePattern::Cron(cron) => b.set_cron(cron.into()),
            };
            match &transmission.message {
                Message::NatsEvent(event) => b.set_nats_event(event.into()),
            };
        })
    }
}

impl From<ScheduleTransmission> for ScheduleTransmissionRequest {
    fn from(transmission: ScheduleTransmission) -> Self {
        ScheduleTransmissionRequest::from(&transmission)
    }
}

fn schedule_pattern(request: &ScheduleTransmissionRequest) -> Result<SchedulePattern> {
    match request.schedule_case() {
        ScheduleCase::None => Err(Error::MissingSchedule),
        ScheduleCase::Delayed => Delayed::try_from(request.delayed()).map(SchedulePattern::Delayed),
        ScheduleCase::Interval => {
            Interval::try_from(request.interval()).map(SchedulePattern::Interval)
        }
        ScheduleCase::Cron => Cron::try_from(request.cron()).map(SchedulePattern::Cron),
    }
}

fn message_of(request: &ScheduleTransmissionRequest) -> Result<Message> {
    match request.message_case() {
        MessageCase::None => Err(Error::MissingMessage),
        MessageCase::NatsEvent => NatsEvent::try_from(request.nats_event()).map(Message::NatsEvent),
    }
}

impl TryFrom<&proto::Delayed> for Delayed {
    type Error = Error;

    fn try_from(delayed: &proto::Delayed) -> Result<Self> {
        Ok(Delayed::new(timestamp(
            delayed.transmit_at.as_ref(),
            "delayed.transmit_at",
        )?))
    }
}

impl From<&Delayed> for proto::Delayed {
    fn from(delayed: &Delayed) -> Self {
        proto::Delayed {
            transmit_at: Some(to_timestamp(&delayed.transmit_at)),
        }
    }
}

impl TryFrom<&proto::Interval> for Interval {
    type Error = Error;

    fn try_from(interval: &proto::Interval) -> Result<Self> {
        let first_transmission =
            timestamp(interval.first_transmission.as_ref(), "interval.first_transmission")?;
        let period = duration(interval.interval.as_ref(), "interval.interval")?;
        if period <= Duration::zero() {
            return Err(Error::NonPositiveInterval);
        }
        let repeat = repeat(interval.repeat.as_ref(), "interval.repeat")?;

        Ok(Interval::new(first_transmission, period, repeat))
    }
}

impl From<&Interval> for proto::Interval {
    fn from(interval: &Interval) -> Self {
        proto::Interval {
            first_transmission: Some(to_timestamp(&interval.first_transmission)),
            interval: Some(to_duration(&interval.interval)),
            repeat: Some(to_repeat(interval.repeat)),
        }
    }
}

impl TryFrom<&proto::Cron> for Cron {
    type Error = Error;

    fn try_from(cron: &proto::Cron) -> Result<Self> {
        let first_transmission_after = timestamp(
            cron.first_transmission_after.as_ref(),
            "cron.first_transmission_after",
        )?;
        if cron.expression.trim().is_empty() {
            return Err(Error::EmptyCronExpression);
        }
        let repeat = repeat(cron.repeat.as_ref(), "cron.repeat")?;

        Ok(Cron::new(
            first_transmission_after,
            cron.expression.clone(),
            repeat,
        ))
    }
}

impl From<&Cron> for proto::Cron {
    fn from(cron: &Cron) -> Self {
        proto::Cron {
            first_transmission_after: Some(to_timestamp(&cron.first_transmission_after)),
            expression: cron.expression.clone(),
            repeat: Some(to_repeat(cron.repeat)),
        }
    }
}

impl TryFrom<&proto::NatsEvent> for NatsEvent {
    type Error = Error;

    fn try_from(event: &proto::NatsEvent) -> Result<Self> {
        if event.subject.trim().is_empty() {
            return Err(Error::EmptySubject);
        }
        Ok(NatsEvent::new(event.subject.clone(), event.payload.clone()))
    }
}

impl From<&NatsEvent> for proto::NatsEvent {
    fn from(event: &NatsEvent) -> Self {
        proto::NatsEvent {
            subject: event.subject.clone(),
            payload: event.payload.clone(),
        }
    }
}

// Any `infinitely` member means unbounded, whatever its flag says.
fn repeat(repeat: Option<&proto::Repeat>, field: &'static str) -> Result<Repeat> {
    let repeat = repeat.ok_or(Error::MissingField(field))?;
    match repeat.kind_case() {
        KindCase::None => Err(Error::MissingField(field)),
        KindCase::Infinitely => Ok(Repeat::Infinitely),
        KindCase::Times => match *repeat.times() {
            0 => Err(Error::ZeroRepetitions(field)),
            times => Ok(Repeat::Times(times)),
        },
    }
}

fn to_repeat(repeat: Repeat) -> proto::Repeat {
    match repeat {
        Repeat::Infinitely => proto::Repeat::infinite(),
        Repeat::Times(times) => proto::Repeat::limited(times),
    }
}

fn timestamp(
    timestamp: Option<&prost_types::Timestamp>,
    field: &'static str,
) -> Result<DateTime<Utc>> {
    let timestamp = timestamp.ok_or(Error::MissingField(field))?;
    let nanos = u32::try_from(timestamp.nanos)
        .ok()
        .filter(|nanos| *nanos < 1_000_000_000)
        .ok_or(Error::InvalidTimestamp(field))?;

    DateTime::from_timestamp(timestamp.seconds, nanos).ok_or(Error::InvalidTimestamp(field))
}

// Leap-second nanos (1_000_000_000 and up) fold back into the protobuf range.
fn to_timestamp(datetime: &DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: datetime.timestamp(),
        nanos: (datetime.timestamp_subsec_nanos() % 1_000_000_000) as i32,
    }
}

fn duration(duration: Option<&prost_types::Duration>, field: &'static str) -> Result<Duration> {
    let duration = duration.ok_or(Error::MissingField(field))?;
    duration_from_parts(duration.seconds, duration.nanos).ok_or(Error::InvalidDuration(field))
}

fn duration_from_parts(seconds: i64, nanos: i32) -> Option<Duration> {
    if nanos.unsigned_abs() >= 1_000_000_000 {
        return None;
    }
    Duration::try_seconds(seconds)
        .and_then(|seconds| seconds.checked_add(&Duration::nanoseconds(nanos.into())))
}

fn to_duration(duration: &Duration) -> prost_types::Duration {
    prost_types::Duration {
        seconds: duration.num_seconds(),
        nanos: duration.subsec_nanos(),
    }
}

#[cfg(feature = "serde")]
mod duration_parts {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    // Same split as `google.protobuf.Duration`, so no precision is lost.
    #[derive(Serialize, Deserialize)]
    struct Parts {
        secs: i64,
        nanos: i32,
    }

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        Parts {
            secs: duration.num_seconds(),
            nanos: duration.subsec_nanos(),
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let Parts { secs, nanos } = Parts::deserialize(deserializer)?;
        super::duration_from_parts(secs, nanos)
            .ok_or_else(|| serde::de::Error::custom("duration out of range"))
    }
}
