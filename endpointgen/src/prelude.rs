//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use endpointgen::prelude::*;
//! ```

// Model types
pub use endpointgen_model::{
    BoxedBool, CredentialScope, DecodeError, DecodeModelOptions, DefaultKey, Endpoint,
    EndpointKey, EndpointVariant, Partition, Region, RegionRegex, Resolver, Service,
};
pub use endpointgen_model::{decode_model, decode_model_str};

// Code generation
pub use endpointgen_codegen::naming::{
    list_partition_names, partition_getter, partition_var_name, region_const_name, to_symbol,
};
pub use endpointgen_codegen::variant::encode_variant;
pub use endpointgen_codegen::{
    CodeGenOptions, CodegenError, Generator, generate, generate_from_file, generate_from_str,
    render,
};
