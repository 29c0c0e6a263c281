use clap::{Parser, Subcommand};
use cmds::analyze::ManifestFormat;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cmds;

#[derive(Parser)]
#[command(name = "capi-gen")]
#[command(about = "Flat C API wrapper generator for native class hierarchies", long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging unless RUST_LOG says otherwise
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the flat C API source file
    Codegen {
        /// Entity file produced by the native parser
        #[arg(short = 'e', long = "entities", value_name = "FILE")]
        entities: PathBuf,

        /// Type map file (native type -> C type)
        #[arg(short = 't', long = "type-map", value_name = "FILE")]
        type_map: Option<PathBuf>,

        /// Generator options file
        #[arg(short = 'c', long = "config", value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output directory, overrides the options file
        #[arg(short = 'o', long = "output", value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Output file name, overrides the options file
        #[arg(long = "output-file", value_name = "NAME")]
        output_file: Option<String>,
    },

    /// Run generation without writing anything and print the symbol manifest
    Analyze {
        /// Entity file produced by the native parser
        #[arg(short = 'e', long = "entities", value_name = "FILE")]
        entities: PathBuf,

        /// Type map file (native type -> C type)
        #[arg(short = 't', long = "type-map", value_name = "FILE")]
        type_map: Option<PathBuf>,

        /// Generator options file
        #[arg(short = 'c', long = "config", value_name = "FILE")]
        config: Option<PathBuf>,

        /// Manifest output format
        #[arg(long = "format", value_enum, default_value = "text")]
        format: ManifestFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match cli.command {
        Commands::Codegen {
            entities,
            type_map,
            config,
            output_dir,
            output_file,
        } => {
            cmds::codegen::run(entities, type_map, config, output_dir, output_file)?;
        }

        Commands::Analyze {
            entities,
            type_map,
            config,
            format,
        } => {
            cmds::analyze::run(entities, type_map, config, format)?;
        }
    }

    Ok(())
}
