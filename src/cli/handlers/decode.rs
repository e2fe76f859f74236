use crate::cli::args::DecodeArgs;
use crate::cli::handlers::{open_input, open_output, resolve_codec};
use base_n::{CodecRegistry, Options};
use std::io::{Read, Write};

pub fn handle(args: DecodeArgs, registry: &CodecRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let (name, codec) = resolve_codec(args.codec.as_deref(), registry)?;

    let mut options = Options::NONE;
    if args.relax {
        options |= Options::RELAX;
    }
    if args.pure {
        options |= Options::PURE;
    }
    if args.padding {
        options |= Options::PADDING;
    }
    if args.checksum {
        options |= Options::CHECKSUM;
    }
    tracing::info!(codec = %name, %options, "decoding");

    // Read input data (must be valid UTF-8 for decoding)
    let mut input_text = String::new();
    open_input(args.file.as_ref())?.read_to_string(&mut input_text)?;

    // the trailing newline written by `encode` is not part of the payload
    let decoded = codec.decode(input_text.trim_end_matches(['\n', '\r']), options)?;

    let mut writer = open_output(args.output.as_ref())?;
    writer.write_all(&decoded)?;
    writer.flush()?;

    tracing::debug!(bytes = decoded.len(), "decoded input");
    Ok(())
}
