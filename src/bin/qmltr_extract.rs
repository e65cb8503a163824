//! qmltr-extract: Expose JSON "name" strings as translatable QML properties
//!
//! Run at build time so that lupdate can see strings that otherwise only
//! live in JSON configuration.
//!
//! Usage:
//!   # Write formats.qml with one qsTr property per "name" string
//!   qmltr-extract formats.json formats.qml
//!
//!   # Qualify names with the full key path (a_b_name instead of b_name)
//!   qmltr-extract --accumulate-prefix formats.json formats.qml
//!
//!   # Also print the extracted properties as JSON
//!   qmltr-extract --list formats.json formats.qml

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use qmltr::{extract_file, ExtractConfig, PrefixMode};
use std::path::PathBuf;

const USAGE: &str = "Usage: qmltr-extract <input_json> <output_qml>";

#[derive(Parser, Debug)]
#[command(name = "qmltr-extract", version)]
#[command(about = "Expose JSON marker strings as translatable QML properties", long_about = None)]
struct Args {
    /// JSON document to read
    #[arg(value_name = "INPUT_JSON")]
    input: PathBuf,

    /// QML file to write (overwritten)
    #[arg(value_name = "OUTPUT_QML")]
    output: PathBuf,

    /// Qualify names with every enclosing key instead of only the nearest one
    #[arg(long)]
    accumulate_prefix: bool,

    /// Key whose string values become properties (default: "name")
    #[arg(long)]
    marker: Option<String>,

    /// Separator between key parts of a property name (default: "_")
    #[arg(long)]
    separator: Option<String>,

    /// Print the extracted properties to stdout as a JSON array
    #[arg(long)]
    list: bool,

    /// Trailing arguments are accepted and ignored
    #[arg(hide = true)]
    _extra: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(
            e.kind(),
            ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument
        ) => {
            println!("{}", USAGE);
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    // Build config
    let mut config = ExtractConfig::default();
    if args.accumulate_prefix {
        config.prefix_mode = PrefixMode::Accumulate;
    }
    if let Some(marker) = args.marker {
        config.marker = marker;
    }
    if let Some(sep) = args.separator {
        config.separator = sep;
    }

    let properties = extract_file(&args.input, &args.output, config).with_context(|| {
        format!(
            "Failed to extract {} into {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    if args.list {
        let output = serde_json::to_string_pretty(&properties)?;
        println!("{}", output);
    }

    Ok(())
}
