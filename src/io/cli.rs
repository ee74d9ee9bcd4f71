//! Command-line interface for writing a single avatar to disk

use crate::algorithm::assembly::RoboHash;
use crate::catalog::FsCatalog;
use crate::io::configuration::{DEFAULT_CATALOG_DIR, DEFAULT_OUTPUT};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_png;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "robohash")]
#[command(
    author,
    version,
    about = "Generate a deterministic avatar image from an identifier"
)]
/// Command-line arguments for avatar generation
pub struct Cli {
    /// Identifier the avatar is derived from
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// Avatar set name, or "any" for a random one
    #[arg(short, long, default_value = "")]
    pub set: String,

    /// Background set name, or "any" for a random one
    #[arg(short, long, default_value = "")]
    pub background: String,

    /// Root directory of the part catalog
    #[arg(short, long, default_value = DEFAULT_CATALOG_DIR)]
    pub catalog: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Interpret the identifier as hexadecimal bytes
    #[arg(short = 'x', long)]
    pub hex: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log every selection decision
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Bytes the generator is seeded from
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `--hex` is set and the identifier is not valid hex
    pub fn identifier_bytes(&self) -> Result<Vec<u8>> {
        if self.hex {
            decode_hex(&self.identifier)
        } else {
            Ok(self.identifier.as_bytes().to_vec())
        }
    }

    /// Default log filter when `RUST_LOG` is unset
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Install a stderr `tracing` subscriber honouring `RUST_LOG`
pub fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    // A subscriber may already be installed by an embedding program
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::debug!(error = %e, "keeping existing tracing subscriber");
    }
}

/// Generate the avatar described by `cli` and write it to the output path
///
/// # Errors
///
/// Returns an error if the identifier is invalid, generation fails or the image cannot be written
pub fn run(cli: &Cli) -> Result<PathBuf> {
    let identifier = cli.identifier_bytes()?;
    let catalog = FsCatalog::new(&cli.catalog);

    let mut robohash = RoboHash::new(&identifier, &cli.set, &cli.background, &catalog)?;
    let img = robohash.assemble()?;
    export_png(&img, &cli.output)?;

    tracing::info!(output = %cli.output.display(), "wrote avatar");
    Ok(cli.output.clone())
}

/// Decode a hexadecimal string into bytes
///
/// # Errors
///
/// Returns an invalid parameter error for odd lengths or non-hex characters
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let digits = text.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(invalid_parameter(
            "identifier",
            &text,
            &"hex input must have an even number of digits",
        ));
    }

    digits
        .chunks_exact(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .filter(|byte| byte.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|byte| u8::from_str_radix(byte, 16).ok())
                .ok_or_else(|| invalid_parameter("identifier", &text, &"not a hex string"))
        })
        .collect()
}
