pub mod decode;
pub mod encode;
pub mod list;

use base_n::{Codec, CodecRegistry};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

pub(crate) fn open_input(file: Option<&PathBuf>) -> io::Result<Box<dyn Read>> {
    Ok(match file {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin().lock()),
    })
}

pub(crate) fn open_output(file: Option<&PathBuf>) -> io::Result<Box<dyn Write>> {
    Ok(match file {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}

/// Picks the codec named on the command line, else the registry default.
pub(crate) fn resolve_codec(
    name: Option<&str>,
    registry: &CodecRegistry,
) -> Result<(String, Codec), Box<dyn std::error::Error>> {
    let name = match name.or(registry.settings.default_codec.as_deref()) {
        Some(name) => name.to_string(),
        None => return Err("no codec given and no default_codec configured".into()),
    };
    let codec = registry.codec(&name)?;
    Ok((name, codec))
}
