//! Identifier constant generation.

use crate::error::CodegenError;
use crate::naming::{comment_text, quote_string, region_const_name, service_set, to_symbol};
use crate::symbols::SymbolTable;
use endpointgen_model::{Partition, Resolver};

/// Generator for partition, region and service identifier constants.
pub struct ConstGenerator<'a> {
    resolver: &'a Resolver,
}

impl<'a> ConstGenerator<'a> {
    /// Creates a new constant generator.
    #[must_use]
    pub fn new(resolver: &'a Resolver) -> Self {
        Self { resolver }
    }

    /// Generates one constant per partition.
    ///
    /// # Errors
    /// Returns `CodegenError` if a constant name is invalid or collides.
    pub fn generate_partition_consts(
        &self,
        symbols: &mut SymbolTable,
    ) -> Result<String, CodegenError> {
        let mut output = String::from("// Partition identifiers.\n");

        for partition in &self.resolver.partitions {
            let name = format!("{}PartitionID", to_symbol(&partition.id));
            symbols.declare(&name, &format!("partition '{}'", partition.id))?;
            output.push_str(&str_const(
                &name,
                &partition.id,
                &format!("{} partition.", partition.name),
            ));
        }

        output.push('\n');
        Ok(output)
    }

    /// Generates the region constants of one partition.
    ///
    /// # Errors
    /// Returns `CodegenError` if a constant name is invalid or collides.
    pub fn generate_region_consts(
        &self,
        partition: &Partition,
        symbols: &mut SymbolTable,
    ) -> Result<String, CodegenError> {
        let mut output = format!("// {} partition's regions.\n", comment_text(&partition.name));

        for (id, region) in &partition.regions {
            let name = format!("{}RegionID", region_const_name(&partition.id, id));
            symbols.declare(&name, &format!("region '{}' of '{}'", id, partition.id))?;
            output.push_str(&str_const(&name, id, &format!("{}.", region.description)));
        }

        output.push('\n');
        Ok(output)
    }

    /// Generates one constant per distinct service identifier.
    ///
    /// # Errors
    /// Returns `CodegenError` if a constant name is invalid or collides.
    pub fn generate_service_consts(
        &self,
        symbols: &mut SymbolTable,
    ) -> Result<String, CodegenError> {
        let mut output = String::from("// Service identifiers.\n");

        for id in service_set(&self.resolver.partitions) {
            let symbol = to_symbol(id);
            let name = format!("{symbol}ServiceID");
            symbols.declare(&name, &format!("service '{id}'"))?;
            output.push_str(&str_const(&name, id, &format!("{symbol}.")));
        }

        output.push('\n');
        Ok(output)
    }
}

/// Renders a documented `&str` constant.
fn str_const(name: &str, value: &str, doc: &str) -> String {
    format!(
        "/// {}\npub const {}: &str = {};\n",
        comment_text(doc),
        name,
        quote_string(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use endpointgen_model::Service;

    fn resolver() -> Resolver {
        let mut aws = Partition::new("aws", "AWS Standard");
        aws.add_region("us-east-1", "US East (N. Virginia)");
        aws.add_region("eu-west-1", "Europe (Ireland)");
        aws.add_service("s3", Service::default());
        aws.add_service("api.ecr", Service::default());

        let mut cn = Partition::new("aws-cn", "AWS China");
        cn.add_region("cn-north-1", "China (Beijing)");
        cn.add_service("s3", Service::default());

        Resolver::new(vec![aws, cn])
    }

    #[test]
    fn test_generate_partition_consts() {
        let resolver = resolver();
        let mut symbols = SymbolTable::new();
        let output = ConstGenerator::new(&resolver)
            .generate_partition_consts(&mut symbols)
            .expect("valid consts");

        assert!(output.starts_with("// Partition identifiers.\n"));
        assert!(output.contains("/// AWS Standard partition.\npub const AwsPartitionID: &str = \"aws\";\n"));
        assert!(output.contains("pub const AwsCnPartitionID: &str = \"aws-cn\";"));
        assert_eq!(symbols.len(), 2);
    }

    #[test]
    fn test_generate_region_consts() {
        let resolver = resolver();
        let mut symbols = SymbolTable::new();
        let output = ConstGenerator::new(&resolver)
            .generate_region_consts(&resolver.partitions[0], &mut symbols)
            .expect("valid consts");

        assert!(output.starts_with("// AWS Standard partition's regions.\n"));
        let eu = output.find("AwsEuWest1RegionID").expect("eu-west-1 constant");
        let us = output.find("AwsUsEast1RegionID").expect("us-east-1 constant");
        assert!(eu < us, "regions must be sorted");
        assert!(output.contains("/// US East (N. Virginia).\npub const AwsUsEast1RegionID: &str = \"us-east-1\";"));
    }

    #[test]
    fn test_generate_service_consts_deduplicated() {
        let resolver = resolver();
        let mut symbols = SymbolTable::new();
        let output = ConstGenerator::new(&resolver)
            .generate_service_consts(&mut symbols)
            .expect("valid consts");

        assert_eq!(output.matches("pub const S3ServiceID").count(), 1);
        assert!(output.contains("/// ApiEcr.\npub const ApiEcrServiceID: &str = \"api.ecr\";"));
        assert_eq!(symbols.len(), 2);
    }

    #[test]
    fn test_generate_service_consts_collision() {
        let mut aws = Partition::new("aws", "AWS Standard");
        aws.add_service("s3-control", Service::default());
        aws.add_service("s3.control", Service::default());
        let resolver = Resolver::new(vec![aws]);

        let mut symbols = SymbolTable::new();
        let err = ConstGenerator::new(&resolver)
            .generate_service_consts(&mut symbols)
            .expect_err("should collide");
        assert!(matches!(err, CodegenError::SymbolCollision { .. }));
    }

    #[test]
    fn test_region_consts_namespaced_by_partition() {
        let mut a = Partition::new("aws", "AWS Standard");
        a.add_region("shared-1", "Shared");
        let mut b = Partition::new("aws-iso", "AWS ISO");
        b.add_region("shared-1", "Shared");
        let resolver = Resolver::new(vec![a, b]);

        let generator = ConstGenerator::new(&resolver);
        let mut symbols = SymbolTable::new();
        for partition in &resolver.partitions {
            generator
                .generate_region_consts(partition, &mut symbols)
                .expect("namespaced constants do not collide");
        }
        assert_eq!(symbols.len(), 2);
    }
}
