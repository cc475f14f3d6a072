//! Optional-field emitters.
//!
//! Each emitter renders a `field: value,` line only when the value differs
//! from its zero value, so struct literals stay compact and the runtime's
//! `EMPTY` constant supplies the rest.

use crate::naming::quote_string;
use endpointgen_model::BoxedBool;

/// Runtime constant for an explicit `true`.
pub const BOXED_TRUE: &str = "boxedTrue";
/// Runtime constant for an explicit `false`.
pub const BOXED_FALSE: &str = "boxedFalse";

/// Emits a string field if it is non-empty.
#[must_use]
pub fn string_if_set(field: &str, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format!("{field}: {},\n", quote_string(value))
}

/// Emits a string slice field if it has any element.
#[must_use]
pub fn string_slice_if_set(field: &str, values: &[String]) -> String {
    if values.is_empty() {
        return String::new();
    }
    let items: Vec<String> = values.iter().map(|v| quote_string(v)).collect();
    format!("{field}: &[{}],\n", items.join(", "))
}

/// Emits a tri-state field unless it is unset.
#[must_use]
pub fn boxed_bool_if_set(field: &str, value: BoxedBool) -> String {
    match value {
        BoxedBool::True => format!("{field}: {BOXED_TRUE},\n"),
        BoxedBool::False => format!("{field}: {BOXED_FALSE},\n"),
        BoxedBool::Unset => String::new(),
    }
}
