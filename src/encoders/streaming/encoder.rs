use crate::core::codec::Codec;
use crate::core::options::Options;
use crate::encoders::algorithms::errors::Error;
use std::io::{Read, Write};

const CHUNK_SIZE: usize = 4096; // 4KB chunks

/// Streaming encoder for processing large amounts of data efficiently.
///
/// Block codecs encode chunk by chunk through an [`EncoderContext`], so
/// memory stays bounded by the chunk size. Positional codecs need the whole
/// payload and read the input to the end first.
///
/// [`EncoderContext`]: crate::EncoderContext
pub struct StreamingEncoder<'a, W: Write> {
    codec: &'a Codec,
    writer: W,
    options: Options,
}

impl<'a, W: Write> StreamingEncoder<'a, W> {
    /// Creates a new streaming encoder.
    ///
    /// # Arguments
    ///
    /// * `codec` - The codec to encode with
    /// * `writer` - The destination for encoded output
    pub fn new(codec: &'a Codec, writer: W) -> Self {
        StreamingEncoder {
            codec,
            writer,
            options: Options::NONE,
        }
    }

    /// Sets the encoding options.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Encodes everything `reader` yields, returning the number of input bytes.
    pub fn encode<R: Read>(&mut self, reader: &mut R) -> Result<u64, Error> {
        if !self.codec.profile().supports_streaming() {
            let mut buffer = Vec::new();
            reader.read_to_end(&mut buffer)?;
            let encoded = self.codec.encode(&buffer, self.options);
            self.writer.write_all(encoded.as_bytes())?;
            return Ok(buffer.len() as u64);
        }

        let mut ctx = self.codec.encoder(self.options)?;
        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut text = String::with_capacity(self.codec.max_char_count(CHUNK_SIZE, self.options));
        let mut total = 0u64;

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            total += bytes_read as u64;

            ctx.feed(&buffer[..bytes_read], &mut text);
            self.writer.write_all(text.as_bytes())?;
            text.clear();
        }

        ctx.finish(&mut text);
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(total)
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
