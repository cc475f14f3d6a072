//! # endpointgen Model
//!
//! Endpoint model types and decoder.
//!
//! This crate provides:
//! - Type definitions for partitions, regions, services and endpoints
//! - The endpoint variant bit set and composite endpoint keys
//! - JSON endpoints model decoding (version 3)
//! - Built-in model customizations applied after decoding

pub mod customizations;
pub mod decoder;
pub mod error;
pub mod types;

pub use decoder::{DecodeModelOptions, decode_model, decode_model_str};
pub use error::DecodeError;
pub use types::{
    BoxedBool, CredentialScope, DefaultKey, Endpoint, EndpointDefaults, EndpointKey,
    EndpointVariant, Partition, Region, RegionRegex, Resolver, Service, ServiceEndpoints,
};
