use std::ops::Deref;

use crate::proto::ScheduleTransmissionRequest;

/// Single-use construction context for [`ScheduleTransmissionRequest`].
///
/// The oneof setters (`set_delayed`, `clear_schedule`, `take_nats_event`,
/// ...) are generated on this type. Reads go through `Deref` to the request
/// under construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScheduleTransmissionRequestBuilder {
    pub(crate) message: ScheduleTransmissionRequest,
}

impl ScheduleTransmissionRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> ScheduleTransmissionRequest {
        self.message
    }
}

impl From<ScheduleTransmissionRequest> for ScheduleTransmissionRequestBuilder {
    fn from(message: ScheduleTransmissionRequest) -> Self {
        Self { message }
    }
}

impl Deref for ScheduleTransmissionRequestBuilder {
    type Target = ScheduleTransmissionRequest;

    fn deref(&self) -> &Self::Target {
        &self.message
    }
}

impl ScheduleTransmissionRequest {
    pub fn builder() -> ScheduleTransmissionRequestBuilder {
        ScheduleTransmissionRequestBuilder::new()
    }

    /// Applies `block` to an empty builder and returns the finished request.
    pub fn build<F>(block: F) -> Self
    where
        F: FnOnce(&mut ScheduleTransmissionRequestBuilder),
    {
        let mut builder = ScheduleTransmissionRequestBuilder::new();
        block(&mut builder);
        builder.build()
    }

    /// Applies `block` to a builder seeded with `self`. `self` is left as is.
    pub fn copy<F>(&self, block: F) -> Self
    where
        F: FnOnce(&mut ScheduleTransmissionRequestBuilder),
    {
        let mut builder = ScheduleTransmissionRequestBuilder::from(self.clone());
        block(&mut builder);
        builder.build()
    }
}
