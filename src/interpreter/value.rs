/// The `Value` enum and its conversions.
///
/// Values are one of three closed variants. Nothing in this module converts
/// between variants implicitly; callers match on both operands themselves.
pub mod core;
