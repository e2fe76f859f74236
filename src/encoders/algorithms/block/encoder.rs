use crate::core::alphabet::Alphabet;
use crate::core::options::Options;
use crate::core::profile::BlockLayout;

/// Incremental encoder for one logical byte stream.
///
/// Bytes are folded into an accumulator until a block is complete, then the
/// block's symbols are appended to the sink. [`finish`](Self::finish) flushes
/// the final partial block; afterwards the context ignores further input.
#[derive(Debug)]
pub struct EncoderContext<'a> {
    alphabet: &'a Alphabet,
    layout: &'static BlockLayout,
    options: Options,
    acc: u32,
    modulus: usize,
    line_pos: usize,
    finished: bool,
}

impl<'a> EncoderContext<'a> {
    pub(crate) fn new(alphabet: &'a Alphabet, layout: &'static BlockLayout, options: Options) -> Self {
        EncoderContext {
            alphabet,
            layout,
            options,
            acc: 0,
            modulus: 0,
            line_pos: 0,
            finished: false,
        }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Encodes `chunk`, appending every completed block to `sink`.
    pub fn feed(&mut self, chunk: &[u8], sink: &mut String) {
        if self.finished {
            return;
        }

        let bytes_per_block = self.layout.bytes_per_block;
        for &byte in chunk {
            self.acc = (self.acc << 8) | byte as u32;
            self.modulus += 1;

            if self.modulus == bytes_per_block {
                let value = self.acc;
                self.write_block(value, self.layout.symbols_per_block, sink);
                self.acc = 0;
                self.modulus = 0;
            }
        }
    }

    /// Flushes the final partial block and closes the context.
    pub fn finish(&mut self, sink: &mut String) {
        if self.finished {
            return;
        }
        self.finished = true;

        let bytes = self.modulus;
        if bytes == 0 {
            return;
        }
        debug_assert!(bytes < self.layout.bytes_per_block);

        let symbols = self.layout.partial_symbols[bytes];
        let value = match self.layout.shift {
            // left-align the leftover bits on a symbol boundary
            Some(shift) => self.acc << (symbols as u32 * shift - bytes as u32 * 8),
            None => self.acc,
        };
        tracing::trace!(bytes, symbols, "flushing partial encoder block");
        self.write_block(value, symbols, sink);
        self.acc = 0;
        self.modulus = 0;
    }

    fn write_block(&mut self, value: u32, symbols: usize, sink: &mut String) {
        let layout = self.layout;
        let indent = self.options.contains(Options::INDENT);
        let breaks = self.options.contains(Options::WRAP) || (indent && layout.indent_wraps);
        let spaces = indent && !layout.indent_wraps;

        if breaks && self.line_pos >= layout.line_width {
            sink.push('\n');
            self.line_pos = 0;
        }
        if spaces && self.line_pos > 0 {
            sink.push(' ');
        }

        let mut digits = [0u8; 8];
        let digits = &mut digits[..symbols];
        match layout.shift {
            Some(shift) => {
                let mask = (1u32 << shift) - 1;
                for (i, digit) in digits.iter_mut().enumerate() {
                    let offset = shift * (symbols - 1 - i) as u32;
                    *digit = ((value >> offset) & mask) as u8;
                }
            }
            None => {
                let radix = layout.radix as u32;
                let mut rest = value;
                for digit in digits.iter_mut().rev() {
                    *digit = (rest % radix) as u8;
                    rest /= radix;
                }
            }
        }

        for &digit in digits.iter() {
            sink.push(self.alphabet.symbol_at(digit as usize));
        }
        let mut written = symbols;

        if symbols < layout.symbols_per_block && !self.options.contains(Options::UNPAD) {
            if let Some(pad) = layout.padding {
                for _ in symbols..layout.symbols_per_block {
                    sink.push(pad);
                }
                written = layout.symbols_per_block;
            }
        }

        self.line_pos += written;
    }
}
