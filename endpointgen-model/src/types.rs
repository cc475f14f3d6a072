//! Endpoint model type definitions.
//!
//! This module contains the data structures the decoder produces and the
//! code generator walks: partitions, regions, services, endpoints and the
//! composite keys selecting endpoint variants.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::BitOr;

/// Endpoint definitions of a service, keyed by region and variant.
pub type ServiceEndpoints = BTreeMap<EndpointKey, Endpoint>;

/// Default endpoint properties, keyed by variant.
pub type EndpointDefaults = BTreeMap<DefaultKey, Endpoint>;

/// Complete decoded endpoint model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolver {
    /// Partitions in model order.
    pub partitions: Vec<Partition>,
}

impl Resolver {
    /// Creates a resolver over the given partitions.
    #[must_use]
    pub fn new(partitions: Vec<Partition>) -> Self {
        Self { partitions }
    }
}

/// A group of regions and services sharing naming and routing conventions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// Partition identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// DNS suffix shared by the partition's endpoints.
    pub dns_suffix: String,
    /// Pattern matching region identifiers of this partition.
    pub region_regex: RegionRegex,
    /// Default endpoint properties.
    pub defaults: EndpointDefaults,
    /// Regions by identifier.
    pub regions: BTreeMap<String, Region>,
    /// Services by identifier.
    pub services: BTreeMap<String, Service>,
}

impl Partition {
    /// Creates an empty partition with the given identifier and display name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a region.
    pub fn add_region(&mut self, id: impl Into<String>, description: impl Into<String>) {
        self.regions.insert(
            id.into(),
            Region {
                description: description.into(),
            },
        );
    }

    /// Adds a service, replacing any previous definition with the same id.
    pub fn add_service(&mut self, id: impl Into<String>, service: Service) {
        self.services.insert(id.into(), service);
    }
}

/// Compiled region-matching pattern of a partition.
///
/// An empty pattern matches every region.
#[derive(Clone, Default)]
pub struct RegionRegex(Option<Regex>);

impl RegionRegex {
    /// Compiles a region pattern.
    ///
    /// # Errors
    /// Returns the regex error if the pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        if pattern.is_empty() {
            return Ok(Self(None));
        }
        Regex::new(pattern).map(|r| Self(Some(r)))
    }

    /// Returns the source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_ref().map_or("", Regex::as_str)
    }
}

impl PartialEq for RegionRegex {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for RegionRegex {}

impl fmt::Debug for RegionRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegionRegex").field(&self.as_str()).finish()
    }
}

/// A named location within a partition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    /// Human readable description.
    pub description: String,
}

/// A capability offered across the regions of a partition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    /// Endpoint used when the service is not regionalized.
    pub partition_endpoint: String,
    /// Whether the service is regionalized.
    pub is_regionalized: BoxedBool,
    /// Default endpoint properties of the service.
    pub defaults: EndpointDefaults,
    /// Endpoints by region and variant.
    pub endpoints: ServiceEndpoints,
}

/// Concrete connection target for a service in a region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    /// Hostname template.
    pub hostname: String,
    /// DNS suffix override.
    pub dns_suffix: String,
    /// SSL common name.
    pub ssl_common_name: String,
    /// Supported protocols.
    pub protocols: Vec<String>,
    /// Supported signature versions.
    pub signature_versions: Vec<String>,
    /// Signing scope override.
    pub credential_scope: CredentialScope,
    /// Deprecation flag.
    pub deprecated: BoxedBool,
}

impl Endpoint {
    /// Creates an endpoint with only the hostname set.
    #[must_use]
    pub fn with_hostname(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..Self::default()
        }
    }

    /// Returns true unless every field holds its zero value.
    #[must_use]
    pub fn is_set(&self) -> bool {
        *self != Self::default()
    }
}

/// Region and service used when signing requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialScope {
    /// Signing region.
    pub region: String,
    /// Signing service name.
    pub service: String,
}

impl CredentialScope {
    /// Returns true if either field is set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.region.is_empty() || !self.service.is_empty()
    }
}

/// Tri-state boolean: unset (inherit), true, or false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoxedBool {
    /// No value; inherit from defaults.
    #[default]
    Unset,
    /// Explicitly true.
    True,
    /// Explicitly false.
    False,
}

impl From<Option<bool>> for BoxedBool {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Self::Unset,
            Some(true) => Self::True,
            Some(false) => Self::False,
        }
    }
}

impl From<bool> for BoxedBool {
    fn from(value: bool) -> Self {
        Self::from(Some(value))
    }
}

/// Bit set of endpoint features selecting an endpoint variant.
///
/// Only the FIPS and dual-stack bits are defined; other raw values can be
/// held but are rejected when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EndpointVariant(u8);

impl EndpointVariant {
    /// No variant flags.
    pub const NONE: Self = Self(0);
    /// FIPS-compliant endpoint.
    pub const FIPS: Self = Self(1);
    /// Dual-stack (IPv4 and IPv6) endpoint.
    pub const DUAL_STACK: Self = Self(1 << 1);
    /// Every defined flag.
    pub const ALL: Self = Self(Self::FIPS.0 | Self::DUAL_STACK.0);

    /// Creates from a raw value.
    #[must_use]
    pub const fn from_raw(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn raw(&self) -> u8 {
        self.0
    }

    /// Returns true if no flag is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if every flag in `other` is set.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if only defined flags are set.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.0 & !Self::ALL.0 == 0
    }

    /// Parses a single variant tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("fips") {
            Some(Self::FIPS)
        } else if tag.eq_ignore_ascii_case("dualstack") {
            Some(Self::DUAL_STACK)
        } else {
            None
        }
    }
}

impl BitOr for EndpointVariant {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Key of a service endpoint: region plus variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EndpointKey {
    /// Region identifier.
    pub region: String,
    /// Variant flags.
    pub variant: EndpointVariant,
}

impl EndpointKey {
    /// Creates a key for the plain (no variant) endpoint of a region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            variant: EndpointVariant::NONE,
        }
    }

    /// Creates a key for a variant endpoint of a region.
    #[must_use]
    pub fn with_variant(region: impl Into<String>, variant: EndpointVariant) -> Self {
        Self {
            region: region.into(),
            variant,
        }
    }
}

/// Key of a defaults entry: variant only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DefaultKey {
    /// Variant flags.
    pub variant: EndpointVariant,
}

impl DefaultKey {
    /// Creates a defaults key for the given variant.
    #[must_use]
    pub const fn new(variant: EndpointVariant) -> Self {
        Self { variant }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_is_set() {
        assert!(!Endpoint::default().is_set());
        assert!(Endpoint::with_hostname("x").is_set());

        let deprecated = Endpoint {
            deprecated: BoxedBool::False,
            ..Endpoint::default()
        };
        assert!(deprecated.is_set());

        let scoped = Endpoint {
            credential_scope: CredentialScope {
                region: String::new(),
                service: "s3".to_string(),
            },
            ..Endpoint::default()
        };
        assert!(scoped.is_set());

        let protocols = Endpoint {
            protocols: vec!["https".to_string()],
            ..Endpoint::default()
        };
        assert!(protocols.is_set());
    }

    #[test]
    fn test_boxed_bool_from() {
        assert_eq!(BoxedBool::from(None), BoxedBool::Unset);
        assert_eq!(BoxedBool::from(Some(true)), BoxedBool::True);
        assert_eq!(BoxedBool::from(false), BoxedBool::False);
    }

    #[test]
    fn test_variant_flags() {
        let both = EndpointVariant::FIPS | EndpointVariant::DUAL_STACK;
        assert_eq!(both, EndpointVariant::ALL);
        assert_eq!(both.raw(), 3);
        assert!(both.contains(EndpointVariant::FIPS));
        assert!(!EndpointVariant::FIPS.contains(EndpointVariant::DUAL_STACK));
        assert!(EndpointVariant::NONE.is_empty());
        assert!(both.is_known());
        assert!(!EndpointVariant::from_raw(4).is_known());
    }

    #[test]
    fn test_variant_from_tag() {
        assert_eq!(EndpointVariant::from_tag("fips"), Some(EndpointVariant::FIPS));
        assert_eq!(
            EndpointVariant::from_tag("DualStack"),
            Some(EndpointVariant::DUAL_STACK)
        );
        assert_eq!(EndpointVariant::from_tag("ipv6"), None);
    }

    #[test]
    fn test_endpoint_key_ordering() {
        let mut keys = [
            EndpointKey::with_variant("us-west-2", EndpointVariant::FIPS),
            EndpointKey::new("us-west-2"),
            EndpointKey::new("eu-west-1"),
        ];
        keys.sort();
        assert_eq!(keys[0].region, "eu-west-1");
        assert_eq!(keys[1], EndpointKey::new("us-west-2"));
        assert_eq!(keys[2].variant, EndpointVariant::FIPS);
    }

    #[test]
    fn test_region_regex() {
        let regex = RegionRegex::new("^(us|eu)\\-\\w+\\-\\d+$").expect("valid pattern");
        assert_eq!(regex.as_str(), "^(us|eu)\\-\\w+\\-\\d+$");

        let empty = RegionRegex::default();
        assert_eq!(empty.as_str(), "");
        assert_eq!(RegionRegex::new("").expect("empty pattern"), empty);

        assert!(RegionRegex::new("(unclosed").is_err());
    }

    #[test]
    fn test_partition_builders() {
        let mut partition = Partition::new("aws", "AWS Standard");
        partition.add_region("us-east-1", "US East (N. Virginia)");
        partition.add_service("s3", Service::default());

        let resolver = Resolver::new(vec![partition]);
        let aws = &resolver.partitions[0];
        assert_eq!(aws.id, "aws");
        assert_eq!(aws.regions["us-east-1"].description, "US East (N. Virginia)");
        assert!(aws.services.contains_key("s3"));
    }
}
