//! # endpointgen Codegen
//!
//! Code generation of static endpoint lookup tables from an endpoints model.
//!
//! This crate provides:
//! - Identifier synthesis for partitions, regions and services
//! - Endpoint variant encoding as flag expressions
//! - Compact struct literals that omit zero-valued fields
//! - Build script integration
//!
//! The generated source is a module file: it starts with inner lint
//! attributes and imports the runtime types (`Partition`, `Endpoint`,
//! `fipsVariant`, ...) from its parent module, so declare it with `mod`
//! rather than `include!`.

pub mod emit;
pub mod error;
pub mod generator;
pub mod naming;
pub mod options;
pub mod rust;
pub mod symbols;
pub mod variant;

pub use endpointgen_model::{DecodeModelOptions, Resolver};
pub use error::CodegenError;
pub use generator::Generator;
pub use options::CodeGenOptions;

use std::io::{Read, Write};
use std::path::Path;

/// Decodes an endpoints model and writes the generated Rust module.
///
/// The module is rendered completely before anything is written, so the
/// writer receives either the whole document or nothing.
///
/// # Arguments
/// * `model` - Reader over the JSON endpoints model
/// * `out` - Destination of the generated source
/// * `options` - Decoder and generator options
///
/// # Errors
/// Returns `CodegenError` if decoding, generation, or writing fails.
pub fn generate<R: Read, W: Write>(
    model: R,
    mut out: W,
    options: &CodeGenOptions,
) -> Result<(), CodegenError> {
    let resolver = endpointgen_model::decode_model(model, &options.decode_model_options)?;
    let source = render(&resolver, options)?;
    out.write_all(source.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Generates Rust code from an endpoints model string.
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if decoding or generation fails.
pub fn generate_from_str(json: &str, options: &CodeGenOptions) -> Result<String, CodegenError> {
    let resolver = endpointgen_model::decode_model_str(json, &options.decode_model_options)?;
    render(&resolver, options)
}

/// Generates Rust code from an endpoints model file and writes it to `out_path`.
///
/// The output file is only created once generation has succeeded.
///
/// # Errors
/// Returns `CodegenError` if reading, decoding, generation, or writing fails.
pub fn generate_from_file(
    model_path: &Path,
    out_path: &Path,
    options: &CodeGenOptions,
) -> Result<(), CodegenError> {
    let json = std::fs::read_to_string(model_path)?;
    let source = generate_from_str(&json, options)?;
    std::fs::write(out_path, source)?;
    tracing::info!(
        model = %model_path.display(),
        output = %out_path.display(),
        "wrote generated endpoints module"
    );
    Ok(())
}

/// Renders an already decoded model.
///
/// # Errors
/// Returns `CodegenError` if generation fails.
pub fn render(resolver: &Resolver, options: &CodeGenOptions) -> Result<String, CodegenError> {
    let source = Generator::new(resolver, options).generate()?;
    tracing::info!(
        partitions = resolver.partitions.len(),
        bytes = source.len(),
        service_ids = !options.disable_generate_service_ids,
        "generated endpoints module"
    );
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = r#"{
        "version": 3,
        "partitions": [
            {
                "partition": "aws",
                "partitionName": "AWS Standard",
                "dnsSuffix": "amazonaws.com",
                "regionRegex": "^us\\-\\w+\\-\\d+$",
                "regions": { "us-east-1": { "description": "US East (N. Virginia)" } },
                "services": {
                    "s3": { "endpoints": { "us-east-1": {} } },
                    "data.iot": { "endpoints": { "us-east-1": {} } }
                }
            }
        ]
    }"#;

    /// Writer that fails every write.
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_generate_writes_module() {
        let mut out = Vec::new();
        generate(MODEL.as_bytes(), &mut out, &CodeGenOptions::default()).expect("generated");
        let source = String::from_utf8(out).expect("utf-8 output");

        assert!(source.starts_with(generator::GENERATED_BANNER));
        assert!(source.contains("pub const AwsPartitionID: &str = \"aws\";"));
        // Customizations ran: the IoT data service is gone and S3 gained a global endpoint.
        assert!(!source.contains("data.iot"));
        assert!(source.contains("EndpointKey { region: \"aws-global\", variant: 0 }"));
    }

    #[test]
    fn test_generate_skip_customizations() {
        let options = CodeGenOptions::default()
            .decode_model_options(DecodeModelOptions::default().skip_customizations(true));
        let source = generate_from_str(MODEL, &options).expect("generated");
        assert!(source.contains("pub const DataIotServiceID: &str = \"data.iot\";"));
        assert!(!source.contains("aws-global"));
    }

    #[test]
    fn test_generate_decode_error_writes_nothing() {
        let mut out = Vec::new();
        let err = generate("{ \"version\": 1 }".as_bytes(), &mut out, &CodeGenOptions::default())
            .expect_err("should fail");
        assert!(matches!(err, CodegenError::Decode(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_generate_io_error() {
        let err = generate(MODEL.as_bytes(), FailingWriter, &CodeGenOptions::default())
            .expect_err("should fail");
        assert!(matches!(err, CodegenError::Io(_)));
    }

    #[test]
    fn test_generate_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let model_path = dir.path().join("endpoints.json");
        let out_path = dir.path().join("defaults.rs");
        std::fs::write(&model_path, MODEL).expect("write model");

        generate_from_file(&model_path, &out_path, &CodeGenOptions::default()).expect("generated");
        let source = std::fs::read_to_string(&out_path).expect("read output");
        assert!(source.contains("pub fn AwsPartition() -> &'static Partition"));
    }

    #[test]
    fn test_generate_from_file_missing_model() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out_path = dir.path().join("defaults.rs");
        let err = generate_from_file(
            &dir.path().join("missing.json"),
            &out_path,
            &CodeGenOptions::default(),
        )
        .expect_err("should fail");
        assert!(matches!(err, CodegenError::Io(_)));
        assert!(!out_path.exists());
    }

    #[test]
    fn test_generated_module_parses() {
        let source = generate_from_str(MODEL, &CodeGenOptions::default()).expect("generated");
        syn::parse_file(&source).expect("generated source is valid Rust");
    }
}
