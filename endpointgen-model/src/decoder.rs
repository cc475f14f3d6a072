//! Endpoints model decoder.
//!
//! This module decodes the JSON endpoints model (version 3) into the
//! [`Resolver`] representation consumed by the code generator. Endpoint
//! variants declared inline under `variants` are expanded into separate map
//! entries keyed by their variant flags.

use crate::customizations;
use crate::error::DecodeError;
use crate::types::{
    CredentialScope, DefaultKey, Endpoint, EndpointDefaults, EndpointKey, EndpointVariant,
    Partition, Region, RegionRegex, Resolver, Service,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;

/// The only model version this decoder understands.
pub const SUPPORTED_VERSION: u64 = 3;

/// Options controlling how the model is decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeModelOptions {
    /// Leaves the decoded model untouched instead of applying the built-in
    /// model customizations.
    pub skip_customizations: bool,
}

impl DecodeModelOptions {
    /// Sets whether model customizations are skipped.
    #[must_use]
    pub fn skip_customizations(mut self, skip: bool) -> Self {
        self.skip_customizations = skip;
        self
    }
}

/// Decodes an endpoints model from a reader.
///
/// # Errors
/// Returns `DecodeError` if the input is not valid JSON, declares an
/// unsupported version, or contains invalid region patterns or variant tags.
pub fn decode_model<R: Read>(
    reader: R,
    options: &DecodeModelOptions,
) -> Result<Resolver, DecodeError> {
    let value: serde_json::Value = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            DecodeError::Io(e.into())
        } else {
            DecodeError::Json(e)
        }
    })?;
    decode_value(value, options)
}

/// Decodes an endpoints model from a string.
///
/// # Errors
/// See [`decode_model`].
pub fn decode_model_str(json: &str, options: &DecodeModelOptions) -> Result<Resolver, DecodeError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    decode_value(value, options)
}

fn decode_value(
    value: serde_json::Value,
    options: &DecodeModelOptions,
) -> Result<Resolver, DecodeError> {
    let version = value
        .get("version")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0);
    if version != SUPPORTED_VERSION {
        return Err(DecodeError::UnsupportedVersion { version });
    }

    let raw: RawModel = serde_json::from_value(value)?;
    let mut partitions = raw
        .partitions
        .into_iter()
        .map(RawPartition::into_partition)
        .collect::<Result<Vec<_>, _>>()?;

    if !options.skip_customizations {
        for partition in &mut partitions {
            customizations::apply(partition);
        }
    }

    tracing::debug!(
        partitions = partitions.len(),
        skip_customizations = options.skip_customizations,
        "decoded endpoints model"
    );

    Ok(Resolver::new(partitions))
}

#[derive(Deserialize)]
struct RawModel {
    #[serde(default)]
    partitions: Vec<RawPartition>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPartition {
    partition: String,
    #[serde(default)]
    partition_name: String,
    #[serde(default)]
    dns_suffix: String,
    #[serde(default)]
    region_regex: String,
    #[serde(default)]
    defaults: Option<RawEndpoint>,
    #[serde(default)]
    regions: BTreeMap<String, RawRegion>,
    #[serde(default)]
    services: BTreeMap<String, RawService>,
}

impl RawPartition {
    fn into_partition(self) -> Result<Partition, DecodeError> {
        let region_regex =
            RegionRegex::new(&self.region_regex).map_err(|source| {
                DecodeError::InvalidRegionRegex {
                    partition: self.partition.clone(),
                    source,
                }
            })?;

        let defaults = expand_defaults(
            self.defaults,
            &format!("partition '{}' defaults", self.partition),
        )?;

        let regions = self
            .regions
            .into_iter()
            .map(|(id, r)| {
                (
                    id,
                    Region {
                        description: r.description,
                    },
                )
            })
            .collect();

        let mut services = BTreeMap::new();
        for (id, raw) in self.services {
            let service = raw.into_service(&id)?;
            services.insert(id, service);
        }

        Ok(Partition {
            id: self.partition,
            name: self.partition_name,
            dns_suffix: self.dns_suffix,
            region_regex,
            defaults,
            regions,
            services,
        })
    }
}

#[derive(Deserialize)]
struct RawRegion {
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawService {
    #[serde(default)]
    partition_endpoint: String,
    #[serde(default)]
    is_regionalized: Option<bool>,
    #[serde(default)]
    defaults: Option<RawEndpoint>,
    #[serde(default)]
    endpoints: BTreeMap<String, RawEndpoint>,
}

impl RawService {
    fn into_service(self, id: &str) -> Result<Service, DecodeError> {
        let defaults = expand_defaults(self.defaults, &format!("service '{id}' defaults"))?;

        let mut endpoints = BTreeMap::new();
        for (region, raw) in self.endpoints {
            let context = format!("service '{id}' endpoint '{region}'");
            for (variant, endpoint) in raw.expand(&context)? {
                endpoints.insert(EndpointKey::with_variant(region.clone(), variant), endpoint);
            }
        }

        Ok(Service {
            partition_endpoint: self.partition_endpoint,
            is_regionalized: self.is_regionalized.into(),
            defaults,
            endpoints,
        })
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawEndpointFields {
    #[serde(default)]
    hostname: String,
    #[serde(default)]
    dns_suffix: String,
    #[serde(default)]
    ssl_common_name: String,
    #[serde(default)]
    protocols: Vec<String>,
    #[serde(default)]
    signature_versions: Vec<String>,
    #[serde(default)]
    credential_scope: RawCredentialScope,
    #[serde(default)]
    deprecated: Option<bool>,
}

impl From<RawEndpointFields> for Endpoint {
    fn from(raw: RawEndpointFields) -> Self {
        Self {
            hostname: raw.hostname,
            dns_suffix: raw.dns_suffix,
            ssl_common_name: raw.ssl_common_name,
            protocols: raw.protocols,
            signature_versions: raw.signature_versions,
            credential_scope: CredentialScope {
                region: raw.credential_scope.region,
                service: raw.credential_scope.service,
            },
            deprecated: raw.deprecated.into(),
        }
    }
}

#[derive(Deserialize, Default)]
struct RawCredentialScope {
    #[serde(default)]
    region: String,
    #[serde(default)]
    service: String,
}

#[derive(Deserialize)]
struct RawEndpoint {
    #[serde(flatten)]
    fields: RawEndpointFields,
    #[serde(default)]
    variants: Vec<RawVariant>,
}

impl RawEndpoint {
    /// Splits the endpoint into its base entry and one entry per variant.
    fn expand(self, context: &str) -> Result<Vec<(EndpointVariant, Endpoint)>, DecodeError> {
        let mut out = Vec::with_capacity(self.variants.len() + 1);
        out.push((EndpointVariant::NONE, Endpoint::from(self.fields)));
        for variant in self.variants {
            let flags = parse_variant_tags(&variant.tags, context)?;
            out.push((flags, Endpoint::from(variant.fields)));
        }
        Ok(out)
    }
}

#[derive(Deserialize)]
struct RawVariant {
    #[serde(flatten)]
    fields: RawEndpointFields,
    #[serde(default)]
    tags: Vec<String>,
}

/// Parses a variant tag list into variant flags.
///
/// # Errors
/// Returns `DecodeError` if the list is empty or holds an unknown tag.
pub fn parse_variant_tags(tags: &[String], context: &str) -> Result<EndpointVariant, DecodeError> {
    if tags.is_empty() {
        return Err(DecodeError::empty_tags(context));
    }

    tags.iter().try_fold(EndpointVariant::NONE, |acc, tag| {
        EndpointVariant::from_tag(tag)
            .map(|flag| acc | flag)
            .ok_or_else(|| DecodeError::unknown_tag(tag, context))
    })
}

fn expand_defaults(
    raw: Option<RawEndpoint>,
    context: &str,
) -> Result<EndpointDefaults, DecodeError> {
    let mut defaults = EndpointDefaults::new();
    if let Some(raw) = raw {
        for (variant, endpoint) in raw.expand(context)? {
            defaults.insert(DefaultKey::new(variant), endpoint);
        }
    }
    Ok(defaults)
}
