//! Struct literal rendering for the model tree.
//!
//! Each function renders one model node as a Rust expression. Multi-line
//! expressions are returned unindented; the enclosing literal shifts them
//! into place, so nesting depth never leaks into the per-node renderers.

use crate::emit::{boxed_bool_if_set, string_if_set, string_slice_if_set};
use crate::error::CodegenError;
use crate::naming::quote_string;
use crate::variant::{default_key_literal, endpoint_key_literal};
use endpointgen_model::{
    CredentialScope, Endpoint, EndpointDefaults, Partition, Region, Service, ServiceEndpoints,
};

const INDENT: &str = "    ";

/// Renders a partition literal.
///
/// # Errors
/// Returns `CodegenError` if an endpoint variant cannot be encoded.
pub fn partition_literal(partition: &Partition) -> Result<String, CodegenError> {
    let mut body = String::new();
    body.push_str(&string_if_set("id", &partition.id));
    body.push_str(&string_if_set("name", &partition.name));
    body.push_str(&string_if_set("dns_suffix", &partition.dns_suffix));
    body.push_str(&format!(
        "region_regex: RegionRegex::new({}),\n",
        quote_string(partition.region_regex.as_str())
    ));
    body.push_str(
        &defaults_field(&partition.defaults).map_err(|e| e.context("defaults"))?,
    );

    let regions: Vec<String> = partition
        .regions
        .iter()
        .map(|(id, region)| format!("({}, {})", quote_string(id), region_literal(region)))
        .collect();
    body.push_str(&format!("regions: {},\n", slice_literal(&regions)));

    let services = partition
        .services
        .iter()
        .map(|(id, service)| {
            let literal =
                service_literal(service).map_err(|e| e.context(format!("service '{id}'")))?;
            Ok(format!("({}, {})", quote_string(id), literal))
        })
        .collect::<Result<Vec<_>, CodegenError>>()?;
    body.push_str(&format!("services: {},\n", slice_literal(&services)));

    Ok(struct_literal("Partition", &body))
}

/// Renders a region literal.
#[must_use]
pub fn region_literal(region: &Region) -> String {
    struct_literal("Region", &string_if_set("description", &region.description))
}

/// Renders a service literal.
///
/// # Errors
/// Returns `CodegenError` if an endpoint variant cannot be encoded.
pub fn service_literal(service: &Service) -> Result<String, CodegenError> {
    let mut body = String::new();
    body.push_str(&string_if_set(
        "partition_endpoint",
        &service.partition_endpoint,
    ));
    body.push_str(&boxed_bool_if_set(
        "is_regionalized",
        service.is_regionalized,
    ));
    body.push_str(&defaults_field(&service.defaults).map_err(|e| e.context("defaults"))?);
    if !service.endpoints.is_empty() {
        body.push_str(&format!(
            "endpoints: {},\n",
            endpoints_literal(&service.endpoints)?
        ));
    }

    Ok(struct_literal("Service", &body))
}

/// Renders the `defaults` field, or nothing if no default carries a value.
fn defaults_field(defaults: &EndpointDefaults) -> Result<String, CodegenError> {
    let entries = defaults
        .iter()
        .filter(|(_, endpoint)| endpoint.is_set())
        .map(|(key, endpoint)| {
            Ok(format!(
                "({}, {})",
                default_key_literal(key)?,
                endpoint_literal(endpoint)
            ))
        })
        .collect::<Result<Vec<_>, CodegenError>>()?;

    if entries.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("defaults: {},\n", slice_literal(&entries)))
}

/// Renders a service endpoint table.
///
/// Every key is kept, including keys whose endpoint is all defaults: their
/// presence marks the region as served.
///
/// # Errors
/// Returns `CodegenError` if an endpoint variant cannot be encoded.
pub fn endpoints_literal(endpoints: &ServiceEndpoints) -> Result<String, CodegenError> {
    let entries = endpoints
        .iter()
        .map(|(key, endpoint)| {
            let key_literal = endpoint_key_literal(key)
                .map_err(|e| e.context(format!("endpoint '{}'", key.region)))?;
            Ok(format!("({}, {})", key_literal, endpoint_literal(endpoint)))
        })
        .collect::<Result<Vec<_>, CodegenError>>()?;

    Ok(slice_literal(&entries))
}

/// Renders an endpoint literal, or `Endpoint::EMPTY` when nothing is set.
#[must_use]
pub fn endpoint_literal(endpoint: &Endpoint) -> String {
    if !endpoint.is_set() {
        return "Endpoint::EMPTY".to_string();
    }

    let mut body = String::new();
    body.push_str(&string_if_set("hostname", &endpoint.hostname));
    body.push_str(&string_if_set("dns_suffix", &endpoint.dns_suffix));
    body.push_str(&string_if_set("ssl_common_name", &endpoint.ssl_common_name));
    body.push_str(&string_slice_if_set("protocols", &endpoint.protocols));
    body.push_str(&string_slice_if_set(
        "signature_versions",
        &endpoint.signature_versions,
    ));
    if endpoint.credential_scope.is_set() {
        body.push_str(&format!(
            "credential_scope: {},\n",
            credential_scope_literal(&endpoint.credential_scope)
        ));
    }
    body.push_str(&boxed_bool_if_set("deprecated", endpoint.deprecated));

    struct_literal("Endpoint", &body)
}

/// Renders a credential scope literal.
#[must_use]
pub fn credential_scope_literal(scope: &CredentialScope) -> String {
    let mut body = String::new();
    body.push_str(&string_if_set("region", &scope.region));
    body.push_str(&string_if_set("service", &scope.service));
    struct_literal("CredentialScope", &body)
}

/// Wraps field lines in a struct literal completed from `Type::EMPTY`.
#[must_use]
pub fn struct_literal(type_name: &str, body: &str) -> String {
    format!(
        "{type_name} {{\n{}{INDENT}..{type_name}::EMPTY\n}}",
        indent(body)
    )
}

/// Renders entries as a static slice literal, one entry per line.
#[must_use]
pub fn slice_literal(entries: &[String]) -> String {
    if entries.is_empty() {
        return "&[]".to_string();
    }

    let mut body = String::new();
    for entry in entries {
        body.push_str(entry);
        body.push_str(",\n");
    }
    format!("&[\n{}]", indent(&body))
}

/// Indents every non-empty line by one level.
#[must_use]
pub fn indent(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for line in text.lines() {
        if !line.is_empty() {
            out.push_str(INDENT);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
