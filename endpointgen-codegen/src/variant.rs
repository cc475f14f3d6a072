//! Endpoint variant codec.
//!
//! Renders an [`EndpointVariant`] bit set as a bitwise-OR expression over
//! the runtime flag constants, and embeds it in the composite key literals.

use crate::error::CodegenError;
use crate::naming::quote_string;
use endpointgen_model::{DefaultKey, EndpointKey, EndpointVariant};

/// Runtime constant holding the FIPS flag.
pub const FIPS_SYMBOL: &str = "fipsVariant";
/// Runtime constant holding the dual-stack flag.
pub const DUAL_STACK_SYMBOL: &str = "dualStackVariant";

/// Flags in canonical rendering order.
const FLAGS: [(EndpointVariant, &str); 2] = [
    (EndpointVariant::FIPS, FIPS_SYMBOL),
    (EndpointVariant::DUAL_STACK, DUAL_STACK_SYMBOL),
];

/// Encodes a variant as a flag expression.
///
/// `0` renders as `0`; any other value as the set flags joined with `|`,
/// FIPS first.
///
/// # Errors
/// Returns `CodegenError::UnknownVariant` if a bit outside the defined flags
/// is set.
pub fn encode_variant(variant: EndpointVariant) -> Result<String, CodegenError> {
    if variant.is_empty() {
        return Ok("0".to_string());
    }
    if !variant.is_known() {
        return Err(CodegenError::UnknownVariant {
            bits: variant.raw(),
        });
    }

    let symbols: Vec<&str> = FLAGS
        .iter()
        .filter(|(flag, _)| variant.contains(*flag))
        .map(|(_, symbol)| *symbol)
        .collect();

    Ok(symbols.join("|"))
}

/// Renders an endpoint key literal.
///
/// # Errors
/// Propagates variant encoding errors.
pub fn endpoint_key_literal(key: &EndpointKey) -> Result<String, CodegenError> {
    Ok(format!(
        "EndpointKey {{ region: {}, variant: {} }}",
        quote_string(&key.region),
        encode_variant(key.variant)?
    ))
}

/// Renders a defaults key literal.
///
/// # Errors
/// Propagates variant encoding errors.
pub fn default_key_literal(key: &DefaultKey) -> Result<String, CodegenError> {
    Ok(format!(
        "DefaultKey {{ variant: {} }}",
        encode_variant(key.variant)?
    ))
}
