use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "base-n")]
#[command(version)]
#[command(about = "Encode and decode binary data with Base16, Kuon Base24, Base64 and Base58 codecs", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Extra codec registry merged over the built-in and user ones
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode binary data to text
    Encode(EncodeArgs),
    /// Decode text back to binary data
    Decode(DecodeArgs),
    /// List available codecs
    List,
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Codec to encode with (defaults to the registry's default_codec)
    #[arg(short, long)]
    pub codec: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Break lines at the codec's line width
    #[arg(long)]
    pub wrap: bool,

    /// Separate blocks with spaces (line breaks for base24)
    #[arg(long)]
    pub indent: bool,

    /// Omit padding symbols
    #[arg(long)]
    pub unpad: bool,

    /// Append a 4-byte double SHA-256 checksum (positional codecs)
    #[arg(long)]
    pub checksum: bool,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Codec the input was encoded with (defaults to the registry's default_codec)
    #[arg(short, long)]
    pub codec: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Skip separators and accept incomplete final blocks
    #[arg(long)]
    pub relax: bool,

    /// Reject whitespace and separators
    #[arg(long)]
    pub pure: bool,

    /// Require complete padding on the final block
    #[arg(long)]
    pub padding: bool,

    /// Verify and strip a 4-byte double SHA-256 checksum (positional codecs)
    #[arg(long)]
    pub checksum: bool,
}
