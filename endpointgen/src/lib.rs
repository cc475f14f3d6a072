//! # endpointgen
//!
//! Build-time generator of static endpoint lookup tables for Rust.
//!
//! endpointgen reads an endpoints model (partitions, regions, services and
//! their endpoints) and emits a Rust module that embeds the same data as
//! `static` tables plus accessor functions, for a runtime resolver to query.
//!
//! ## Features
//!
//! - **Deterministic output** - the same model always renders byte-identical source
//! - **Compact literals** - zero-valued fields are left to the runtime `EMPTY` constants
//! - **Collision checks** - identifiers that synthesize alike fail generation
//! - **Model customizations** - known model corrections applied while decoding
//!
//! ## Quick Start
//!
//! ```ignore
//! // build.rs
//! use endpointgen::prelude::*;
//!
//! let out = std::path::Path::new(&std::env::var("OUT_DIR")?).join("defaults.rs");
//! generate_from_file(
//!     std::path::Path::new("endpoints.json"),
//!     &out,
//!     &CodeGenOptions::new().disable_generate_service_ids(true),
//! )?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - Model types, JSON decoder and customizations
//! - [`codegen`] - Naming toolkit, variant codec and Rust code generation

pub mod prelude;

/// Endpoint model types and decoding.
pub mod model {
    pub use endpointgen_model::*;
}

/// Rust code generation from endpoint models.
pub mod codegen {
    pub use endpointgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use endpointgen_codegen::{
    CodeGenOptions, CodegenError, Generator, generate, generate_from_file, generate_from_str,
    render,
};
pub use endpointgen_model::{DecodeError, DecodeModelOptions, Resolver, decode_model};
