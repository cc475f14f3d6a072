//! Endpoint resolver generation.
//!
//! Emits the `DefaultResolver`/`DefaultPartitions` accessors, the static
//! table of every partition, and one private static plus public accessor per
//! partition.

use crate::error::CodegenError;
use crate::naming::{comment_text, list_partition_names, partition_getter, partition_var_name};
use crate::rust::literals::partition_literal;
use crate::symbols::SymbolTable;
use endpointgen_model::Resolver;

/// Name of the aggregate resolver accessor.
pub const DEFAULT_RESOLVER_FN: &str = "DefaultResolver";
/// Name of the aggregate partition list accessor.
pub const DEFAULT_PARTITIONS_FN: &str = "DefaultPartitions";
/// Name of the static holding every partition.
pub const DEFAULT_PARTITIONS_VAR: &str = "defaultPartitions";

/// Generator for resolver accessors and partition tables.
pub struct ResolverGenerator<'a> {
    resolver: &'a Resolver,
}

impl<'a> ResolverGenerator<'a> {
    /// Creates a new resolver generator.
    #[must_use]
    pub fn new(resolver: &'a Resolver) -> Self {
        Self { resolver }
    }

    /// Generates the aggregate accessors and every partition table.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name collides or an endpoint variant cannot
    /// be encoded.
    pub fn generate(&self, symbols: &mut SymbolTable) -> Result<String, CodegenError> {
        for name in [
            DEFAULT_RESOLVER_FN,
            DEFAULT_PARTITIONS_FN,
            DEFAULT_PARTITIONS_VAR,
        ] {
            symbols.declare(name, "default resolver")?;
        }

        let mut output = self.generate_defaults();

        for partition in &self.resolver.partitions {
            let getter = partition_getter(&partition.id);
            let var = partition_var_name(&partition.id);
            let origin = format!("partition '{}'", partition.id);
            symbols.declare(&getter, &origin)?;
            symbols.declare(&var, &origin)?;

            tracing::debug!(partition = %partition.id, "rendering partition table");

            output.push_str(&format!(
                "/// {getter} returns the resolver for {}.\n",
                comment_text(&partition.name)
            ));
            output.push_str(&format!("pub fn {getter}() -> &'static Partition {{\n"));
            output.push_str(&format!("    &{var}\n"));
            output.push_str("}\n\n");

            let literal = partition_literal(partition)
                .map_err(|e| e.context(format!("partition '{}'", partition.id)))?;
            output.push_str(&format!("static {var}: Partition = {literal};\n\n"));
        }

        Ok(output)
    }

    /// Generates the aggregate accessors and the partition list static.
    fn generate_defaults(&self) -> String {
        let partitions = &self.resolver.partitions;
        let names = comment_text(&list_partition_names(partitions));
        let mut output = String::new();

        output.push_str(&format!(
            "/// {DEFAULT_RESOLVER_FN} returns an endpoint resolver that will be able\n\
             /// to resolve endpoints for: {names}.\n\
             ///\n\
             /// Use {DEFAULT_PARTITIONS_FN}() to get the list of the default partitions.\n"
        ));
        output.push_str(&format!(
            "pub fn {DEFAULT_RESOLVER_FN}() -> &'static Partitions {{\n"
        ));
        output.push_str(&format!("    &{DEFAULT_PARTITIONS_VAR}\n"));
        output.push_str("}\n\n");

        output.push_str(&format!(
            "/// {DEFAULT_PARTITIONS_FN} returns the partitions this module is bundled\n\
             /// with. The available partitions are: {names}.\n"
        ));
        output.push_str(&format!(
            "pub fn {DEFAULT_PARTITIONS_FN}() -> &'static [&'static Partition] {{\n"
        ));
        output.push_str(&format!("    {DEFAULT_PARTITIONS_VAR}.0\n"));
        output.push_str("}\n\n");

        if partitions.is_empty() {
            output.push_str(&format!(
                "static {DEFAULT_PARTITIONS_VAR}: Partitions = Partitions(&[]);\n\n"
            ));
        } else {
            output.push_str(&format!(
                "static {DEFAULT_PARTITIONS_VAR}: Partitions = Partitions(&[\n"
            ));
            for partition in partitions {
                output.push_str(&format!("    &{},\n", partition_var_name(&partition.id)));
            }
            output.push_str("]);\n\n");
        }

        output
    }
}
