//! Top-level module generator.
//!
//! Composes the per-layer generators into one self-contained Rust module:
//! banner and imports, partition constants, region constants per partition,
//! service constants (unless disabled), then the resolver tables.

use crate::emit::{BOXED_FALSE, BOXED_TRUE};
use crate::error::CodegenError;
use crate::options::CodeGenOptions;
use crate::rust::{ConstGenerator, ResolverGenerator};
use crate::symbols::SymbolTable;
use crate::variant::{DUAL_STACK_SYMBOL, FIPS_SYMBOL};
use endpointgen_model::Resolver;

/// First line of every generated module.
pub const GENERATED_BANNER: &str = "// Code generated by endpointgen. DO NOT EDIT.";

/// Runtime items the generated module imports from its parent.
const RUNTIME_IMPORTS: [&str; 13] = [
    "CredentialScope",
    "DefaultKey",
    "Endpoint",
    "EndpointKey",
    "Partition",
    "Partitions",
    "Region",
    "RegionRegex",
    "Service",
    BOXED_FALSE,
    BOXED_TRUE,
    DUAL_STACK_SYMBOL,
    FIPS_SYMBOL,
];

/// Generates a Rust module from a decoded endpoints model.
pub struct Generator<'a> {
    resolver: &'a Resolver,
    options: &'a CodeGenOptions,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(resolver: &'a Resolver, options: &'a CodeGenOptions) -> Self {
        Self { resolver, options }
    }

    /// Generates the complete module source.
    ///
    /// # Errors
    /// Returns `CodegenError` if an endpoint variant cannot be encoded or a
    /// synthesized identifier is invalid or collides.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut symbols = SymbolTable::new();
        for name in RUNTIME_IMPORTS {
            symbols
                .declare(name, "runtime import")
                .map_err(|e| e.in_layer("defaults"))?;
        }

        let consts = ConstGenerator::new(self.resolver);
        let mut output = self.generate_header();

        tracing::debug!("rendering partition consts");
        output.push_str(
            &consts
                .generate_partition_consts(&mut symbols)
                .map_err(|e| e.in_layer("partition consts"))?,
        );

        for partition in &self.resolver.partitions {
            tracing::debug!(partition = %partition.id, "rendering partition region consts");
            output.push_str(
                &consts
                    .generate_region_consts(partition, &mut symbols)
                    .map_err(|e| e.in_layer("partition region consts"))?,
            );
        }

        if self.options.disable_generate_service_ids {
            tracing::debug!("service consts disabled");
        } else {
            tracing::debug!("rendering service consts");
            output.push_str(
                &consts
                    .generate_service_consts(&mut symbols)
                    .map_err(|e| e.in_layer("service consts"))?,
            );
        }

        tracing::debug!("rendering endpoint resolvers");
        output.push_str(
            &ResolverGenerator::new(self.resolver)
                .generate(&mut symbols)
                .map_err(|e| e.in_layer("endpoint resolvers"))?,
        );

        tracing::debug!(symbols = symbols.len(), "declared module symbols");

        // Exactly one trailing newline.
        let trimmed = output.trim_end().len();
        output.truncate(trimmed);
        output.push('\n');

        Ok(output)
    }

    /// Generates the banner, lint allowances and runtime imports.
    fn generate_header(&self) -> String {
        let mut output = String::new();
        output.push_str(GENERATED_BANNER);
        output.push_str("\n\n");
        output.push_str("#![allow(clippy::needless_update, dead_code, non_snake_case, non_upper_case_globals, unused_imports)]\n\n");

        output.push_str("use super::{\n");
        for name in RUNTIME_IMPORTS {
            output.push_str(&format!("    {name},\n"));
        }
        output.push_str("};\n\n");

        output
    }
}
