use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Generates presence-aware accessors for a prost oneof enum.
///
/// ```ignore
/// #[derive(Clone, PartialEq, ::prost::Oneof, OneofAccessors)]
/// #[accessors(
///     message = "super::ScheduleTransmissionRequest",
///     builder = "super::ScheduleTransmissionRequestBuilder",
///     field = "schedule",
///     case = "ScheduleCase"
/// )]
/// pub enum Schedule {
///     #[prost(message, tag = "1")]
///     Delayed(super::Delayed),
/// }
/// ```
///
/// The message gets `schedule_case()`, `delayed()`, `has_delayed()` and
/// `delayed_or_none()`. The builder (or the message, when no builder is
/// named) gets `set_delayed()`, `clear_delayed()`, `take_delayed()` and
/// `clear_schedule()`. A builder must hold the message in a field named
/// `message` that is visible from the module of the oneof enum.
#[proc_macro_derive(OneofAccessors, attributes(accessors))]
pub fn derive_oneof_accessors(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    schedule_transmission_core::derive_oneof_accessors(input).into()
}
