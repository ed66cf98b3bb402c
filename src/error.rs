#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request has no schedule set")]
    MissingSchedule,
    #[error("request has no message set")]
    MissingMessage,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("timestamp `{0}` is out of range")]
    InvalidTimestamp(&'static str),
    #[error("duration `{0}` is out of range")]
    InvalidDuration(&'static str),
    #[error("interval must be positive")]
    NonPositiveInterval,
    #[error("cron expression is empty")]
    EmptyCronExpression,
    #[error("nats subject is empty")]
    EmptySubject,
    #[error("`{0}` must repeat at least once")]
    ZeroRepetitions(&'static str),
    #[error("failed to decode request: {0}")]
    Decode(#[from] prost::DecodeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
