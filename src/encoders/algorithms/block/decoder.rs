use crate::core::alphabet::Alphabet;
use crate::core::options::Options;
use crate::core::profile::BlockLayout;
use crate::encoders::algorithms::errors::DecodeError;

/// Incremental decoder for one logical text stream.
///
/// Symbols are folded into an accumulator until a block is complete, then the
/// block's bytes are appended to the sink most significant first. Text may be
/// split across [`feed`](Self::feed) calls at any character boundary.
#[derive(Debug)]
pub struct DecoderContext<'a> {
    alphabet: &'a Alphabet,
    layout: &'static BlockLayout,
    options: Options,
    acc: u64,
    modulus: usize,
    pad_run: usize,
    symbols_seen: usize,
    position: usize,
    finished: bool,
}

impl<'a> DecoderContext<'a> {
    pub(crate) fn new(alphabet: &'a Alphabet, layout: &'static BlockLayout, options: Options) -> Self {
        DecoderContext {
            alphabet,
            layout,
            options,
            acc: 0,
            modulus: 0,
            pad_run: 0,
            symbols_seen: 0,
            position: 0,
            finished: false,
        }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Decodes `text`, appending every completed block to `sink`.
    pub fn feed(&mut self, text: &str, sink: &mut Vec<u8>) -> Result<(), DecodeError> {
        if self.finished {
            return Ok(());
        }

        let pure = self.options.contains(Options::PURE);
        let relax = self.options.contains(Options::RELAX);
        let strict_padding = self.options.contains(Options::PADDING);

        for (offset, c) in text.chars().enumerate() {
            match self.alphabet.index_of(c) {
                Some(value) => {
                    if self.pad_run > 0 {
                        if strict_padding {
                            return Err(DecodeError::invalid_padding(
                                self.position,
                                "data symbol after padding inside a block",
                            ));
                        }
                        self.flush_partial(sink)?;
                    }
                    self.push_symbol(value, sink)?;
                }
                None if Some(c) == self.layout.padding => {
                    if self.modulus == 0 {
                        if strict_padding {
                            return Err(DecodeError::invalid_padding(
                                self.position,
                                "padding must follow data symbols in the same block",
                            ));
                        }
                    } else {
                        self.pad_run += 1;
                        if self.modulus + self.pad_run == self.layout.symbols_per_block {
                            self.flush_partial(sink)?;
                        }
                    }
                }
                None if !pure && c.is_ascii_whitespace() => {}
                None if !pure && relax && self.layout.separators.contains(&c) => {}
                None => {
                    return Err(DecodeError::invalid_character(
                        c,
                        self.position,
                        text,
                        offset,
                        &self.valid_chars(),
                    ));
                }
            }
            self.position += 1;
        }

        Ok(())
    }

    /// Validates and flushes the final partial block, then closes the context.
    pub fn finish(&mut self, sink: &mut Vec<u8>) -> Result<(), DecodeError> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        if self.pad_run > 0 && self.options.contains(Options::PADDING) {
            return Err(DecodeError::invalid_padding(
                self.position,
                format!(
                    "padding run of {} does not complete a block of {} symbols",
                    self.pad_run, self.layout.symbols_per_block
                ),
            ));
        }
        self.flush_partial(sink)
    }

    fn push_symbol(&mut self, value: usize, sink: &mut Vec<u8>) -> Result<(), DecodeError> {
        let layout = self.layout;
        self.acc = match layout.shift {
            Some(shift) => (self.acc << shift) | value as u64,
            None => self.acc * layout.radix as u64 + value as u64,
        };
        self.modulus += 1;
        self.symbols_seen += 1;

        if self.modulus == layout.symbols_per_block {
            let bytes = layout.bytes_per_block;
            let limit = 1u64 << (8 * bytes);
            if self.acc >= limit && !self.options.contains(Options::RELAX) {
                return Err(DecodeError::InsignificantBits {
                    position: self.position,
                });
            }
            write_be(self.acc, bytes, sink);
            self.acc = 0;
            self.modulus = 0;
        }
        Ok(())
    }

    fn flush_partial(&mut self, sink: &mut Vec<u8>) -> Result<(), DecodeError> {
        let symbols = self.modulus;
        let padded = self.pad_run > 0;
        let acc = self.acc;
        self.acc = 0;
        self.modulus = 0;
        self.pad_run = 0;

        if symbols == 0 {
            return Ok(());
        }
        debug_assert!(symbols < self.layout.symbols_per_block);

        let relax = self.options.contains(Options::RELAX);
        let (bytes, complete) = self.layout.partial_bytes(symbols);

        if !complete && !relax {
            return Err(self.missing_symbol_error());
        }
        if complete
            && !padded
            && self.layout.padding.is_some()
            && self.options.contains(Options::PADDING)
        {
            return Err(DecodeError::invalid_padding(
                self.position,
                format!(
                    "final block of {} symbols must be padded to {}",
                    symbols, self.layout.symbols_per_block
                ),
            ));
        }

        let value = match self.layout.shift {
            Some(shift) => {
                let spare = symbols as u32 * shift - bytes as u32 * 8;
                if acc & ((1u64 << spare) - 1) != 0 && !relax {
                    return Err(DecodeError::InsignificantBits {
                        position: self.position,
                    });
                }
                acc >> spare
            }
            None => {
                let limit = 1u64 << (8 * bytes);
                if acc >= limit && !relax {
                    return Err(DecodeError::InsignificantBits {
                        position: self.position,
                    });
                }
                acc & (limit - 1)
            }
        };

        tracing::trace!(symbols, bytes, "flushing partial decoder block");
        write_be(value, bytes, sink);
        Ok(())
    }

    fn missing_symbol_error(&self) -> DecodeError {
        if self.layout.bytes_per_block == 1 {
            return DecodeError::invalid_length(
                self.symbols_seen,
                "an even number of characters",
                "every byte takes two hex digits; the input has an odd character count",
            );
        }

        let partials: Vec<String> = self.layout.partial_symbols[1..]
            .iter()
            .map(|m| m.to_string())
            .collect();
        DecodeError::invalid_length(
            self.symbols_seen,
            format!(
                "whole blocks of {} symbols, with a final block of {} symbols",
                self.layout.symbols_per_block,
                partials.join(" or ")
            ),
            "the last block is missing a symbol; decode with relax to drop the incomplete tail",
        )
    }

    fn valid_chars(&self) -> String {
        let mut valid = self.alphabet.describe();
        if let Some(pad) = self.layout.padding {
            valid.push(pad);
        }
        valid
    }
}

fn write_be(value: u64, bytes: usize, sink: &mut Vec<u8>) {
    for i in (0..bytes).rev() {
        sink.push((value >> (8 * i)) as u8);
    }
}
