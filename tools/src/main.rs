use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use strframe_tools::{
    format_frame_pretty, format_walk_pretty, inspect_frame, version_rows, walk_frames,
};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wire::Version;

#[derive(Parser)]
#[command(
    name = "strframe-tools",
    version,
    about = "STREAM frame inspection and decoding tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode the STREAM frame at the start of the input.
    Decode {
        #[command(flatten)]
        input: Input,
        /// Bytes from the frame start to the end of the packet.
        /// Defaults to the input length.
        #[arg(long)]
        remaining: Option<usize>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Decode back-to-back STREAM frames filling one packet payload.
    Walk {
        #[command(flatten)]
        input: Input,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// List supported versions and their layouts.
    Versions {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct Input {
    /// Frame bytes as hex. Whitespace is ignored.
    #[arg(conflicts_with = "file")]
    hex: Option<String>,
    /// Read raw frame bytes from a file instead.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Protocol version, e.g. Q039.
    #[arg(long, default_value = "Q041")]
    version: Version,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Decode {
            input,
            remaining,
            format,
        } => {
            let bytes = load_input(&input)?;
            debug!(version = %input.version, len = bytes.len(), ?remaining, "decoding frame");
            let report = inspect_frame(input.version, &bytes, remaining)
                .map_err(|err| {
                    warn!(version = %input.version, %err, "decode failed");
                    err
                })
                .context("decode stream frame")?;
            info!(
                stream_id = report.frame.stream_id,
                data_len = report.frame.data_len,
                "decoded frame"
            );
            match format {
                OutputFormat::Json => print_json(&report)?,
                OutputFormat::Pretty => println!("{}", format_frame_pretty(&report)),
            }
        }
        Command::Walk { input, format } => {
            let bytes = load_input(&input)?;
            debug!(version = %input.version, len = bytes.len(), "walking packet");
            let report = walk_frames(input.version, &bytes);
            if let Some(err) = &report.error {
                warn!(frames = report.frames.len(), %err, "walk stopped early");
            }
            match format {
                OutputFormat::Json => print_json(&report)?,
                OutputFormat::Pretty => print!("{}", format_walk_pretty(&report)),
            }
        }
        Command::Versions { format } => {
            let rows = version_rows();
            match format {
                OutputFormat::Json => print_json(&rows)?,
                OutputFormat::Pretty => {
                    for row in rows {
                        println!("{}  {}  {}", row.version, row.tag, row.layout);
                    }
                }
            }
        }
    }
    Ok(())
}

fn load_input(input: &Input) -> Result<Vec<u8>> {
    match (&input.hex, &input.file) {
        (Some(text), _) => parse_hex(text),
        (None, Some(path)) => read_file(path),
        (None, None) => bail!("either frame hex or --file is required"),
    }
}

fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = compact.strip_prefix("0x").unwrap_or(&compact);
    hex::decode(compact).context("parse frame hex")
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read frame {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{json}");
    Ok(())
}
