use crate::core::codec::Codec;
use crate::core::options::Options;
use crate::encoders::algorithms::errors::Error;
use std::io::{self, Read, Write};

const CHUNK_SIZE: usize = 4096; // 4KB chunks

/// Streaming decoder for processing large amounts of encoded text efficiently.
///
/// Input is read in chunks; a UTF-8 sequence split across two reads is
/// carried over to the next one. Positional codecs read the input to the
/// end first.
pub struct StreamingDecoder<'a, W: Write> {
    codec: &'a Codec,
    writer: W,
    options: Options,
}

impl<'a, W: Write> StreamingDecoder<'a, W> {
    /// Creates a new streaming decoder.
    ///
    /// # Arguments
    ///
    /// * `codec` - The codec the text was encoded with
    /// * `writer` - The destination for decoded output
    pub fn new(codec: &'a Codec, writer: W) -> Self {
        StreamingDecoder {
            codec,
            writer,
            options: Options::NONE,
        }
    }

    /// Sets the decoding options.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Decodes everything `reader` yields, returning the number of bytes written.
    ///
    /// Bytes decoded before a format error have already been written when
    /// the error is returned.
    pub fn decode<R: Read>(&mut self, reader: &mut R) -> Result<u64, Error> {
        if !self.codec.profile().supports_streaming() {
            let mut text = String::new();
            reader.read_to_string(&mut text)?;
            let decoded = self.codec.decode(&text, self.options)?;
            self.writer.write_all(&decoded)?;
            return Ok(decoded.len() as u64);
        }

        let mut ctx = self.codec.decoder(self.options)?;
        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut carry = Vec::with_capacity(CHUNK_SIZE + 4);
        let mut bytes = Vec::with_capacity(self.codec.max_byte_count(CHUNK_SIZE, self.options));
        let mut total = 0u64;

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            carry.extend_from_slice(&buffer[..bytes_read]);

            // an incomplete sequence at the end waits for the next read
            let valid = match std::str::from_utf8(&carry) {
                Ok(text) => text.len(),
                Err(e) if e.error_len().is_none() => e.valid_up_to(),
                Err(_) => return Err(invalid_utf8().into()),
            };
            let text = std::str::from_utf8(&carry[..valid]).map_err(|_| invalid_utf8())?;

            let fed = ctx.feed(text, &mut bytes);
            self.writer.write_all(&bytes)?;
            total += bytes.len() as u64;
            bytes.clear();
            fed?;

            carry.drain(..valid);
        }

        if !carry.is_empty() {
            return Err(invalid_utf8().into());
        }

        let finished = ctx.finish(&mut bytes);
        self.writer.write_all(&bytes)?;
        total += bytes.len() as u64;
        finished?;

        self.writer.flush()?;
        Ok(total)
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "encoded input is not valid UTF-8")
}
