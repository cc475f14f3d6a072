//! Example generator run over an endpoints model file.
//!
//! Run with: `cargo run --example generate -- <endpoints.json> [output.rs]`
//!
//! Without an output path the module is printed to stdout.

use clap::Parser;
use endpointgen::prelude::*;
use std::path::PathBuf;

/// Generate a static endpoints module from an endpoints model.
#[derive(Parser, Debug)]
#[command(name = "generate", about, long_about = None)]
struct Args {
    /// Path to the JSON endpoints model
    model: PathBuf,

    /// Output file; stdout when omitted
    output: Option<PathBuf>,

    /// Do not emit service identifier constants
    #[arg(long)]
    no_service_ids: bool,

    /// Leave the decoded model untouched
    #[arg(long)]
    skip_customizations: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let options = CodeGenOptions::new()
        .decode_model_options(
            DecodeModelOptions::default().skip_customizations(args.skip_customizations),
        )
        .disable_generate_service_ids(args.no_service_ids);

    match &args.output {
        Some(output) => {
            generate_from_file(&args.model, output, &options)?;
            eprintln!("Wrote {}", output.display());
        }
        None => {
            let file = std::fs::File::open(&args.model)?;
            generate(std::io::BufReader::new(file), std::io::stdout().lock(), &options)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "generate",
            "endpoints.json",
            "defaults.rs",
            "--no-service-ids",
        ])
        .expect("valid arguments");
        assert_eq!(args.model, PathBuf::from("endpoints.json"));
        assert_eq!(args.output, Some(PathBuf::from("defaults.rs")));
        assert!(args.no_service_ids);
        assert!(!args.skip_customizations);
    }

    #[test]
    fn test_args_reject_unknown_flag() {
        let err = Args::try_parse_from(["generate", "endpoints.json", "--no-service-id"])
            .expect_err("misspelled flag");
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_args_help_is_not_a_path() {
        let err = Args::try_parse_from(["generate", "--help"]).expect_err("help exits");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_args_require_model() {
        assert!(Args::try_parse_from(["generate"]).is_err());
    }
}
