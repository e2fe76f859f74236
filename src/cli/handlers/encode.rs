use crate::cli::args::EncodeArgs;
use crate::cli::handlers::{open_input, open_output, resolve_codec};
use base_n::{CodecRegistry, Options, StreamingEncoder};
use std::io::Write;

pub fn handle(args: EncodeArgs, registry: &CodecRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let (name, codec) = resolve_codec(args.codec.as_deref(), registry)?;

    let mut options = Options::NONE;
    if args.wrap {
        options |= Options::WRAP;
    }
    if args.indent {
        options |= Options::INDENT;
    }
    if args.unpad {
        options |= Options::UNPAD;
    }
    if args.checksum {
        options |= Options::CHECKSUM;
    }
    tracing::info!(codec = %name, %options, "encoding");

    let mut reader = open_input(args.file.as_ref())?;
    let mut writer = open_output(args.output.as_ref())?;

    let mut encoder = StreamingEncoder::new(&codec, &mut writer).with_options(options);
    let consumed = encoder.encode(&mut reader)?;
    writeln!(writer)?;
    writer.flush()?;

    tracing::debug!(bytes = consumed, "encoded input");
    Ok(())
}
