//! Property tests for the codec invariants.

use base_n::{Alphabet, Codec, Options, Profile};
use proptest::prelude::*;

fn block_codecs() -> [&'static Codec; 4] {
    [Codec::base16(), Codec::base16_lower(), Codec::base24(), Codec::base64()]
}

fn all_codecs() -> [&'static Codec; 7] {
    [
        Codec::base16(),
        Codec::base24(),
        Codec::base64(),
        Codec::base64_url(),
        Codec::base58(),
        Codec::base58_flickr(),
        Codec::base58_ripple(),
    ]
}

fn options_from(bits: u16) -> Options {
    Options::from_bits_truncate(bits)
}

/// Option sets under which encode output is acceptable to decode with the
/// same options.
fn consistent(codec: &Codec, options: Options) -> bool {
    let formatted = options.intersects(Options::WRAP | Options::INDENT);
    let padded = codec.profile().layout().is_some_and(|l| l.padding.is_some());
    !(options.contains(Options::PURE) && formatted)
        && !(padded && options.contains(Options::PADDING | Options::UNPAD))
}

/// A positional codec over `radix` generated symbols. Non-ASCII symbols come
/// first so the highest values fall on printable ASCII.
fn generated_positional(radix: usize) -> Codec {
    let ascii = radix.min(94);
    let symbols: String = (0x100..0x100 + (radix - ascii) as u32)
        .chain(0x21..0x21 + ascii as u32)
        .filter_map(char::from_u32)
        .collect();
    let alphabet = Alphabet::new(&symbols).unwrap();
    Codec::new(Profile::positional(radix).unwrap(), alphabet).unwrap()
}

fn custom_base16_codecs() -> Vec<Codec> {
    ["ABCDEFGHIJKLMNOP", "0123456789ABCDEF", "fedcba9876543210"]
        .into_iter()
        .map(|symbols| Codec::new(Profile::Base16, Alphabet::new(symbols).unwrap()).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn roundtrip_generated_positional_alphabets(
        radix in 2usize..=256,
        data in prop::collection::vec(any::<u8>(), 0..64),
        checksum in any::<bool>(),
    ) {
        let codec = generated_positional(radix);
        let options = if checksum { Options::CHECKSUM } else { Options::NONE };
        let text = codec.encode(&data, options);
        prop_assert!(text.chars().all(|c| codec.alphabet().index_of(c).is_some()));
        prop_assert_eq!(codec.decode(&text, options).unwrap(), data);
    }

    #[test]
    fn roundtrip_custom_base16_alphabets(
        data in prop::collection::vec(any::<u8>(), 0..64),
        pure in any::<bool>(),
    ) {
        let options = if pure { Options::PURE } else { Options::NONE };
        for codec in custom_base16_codecs() {
            let text = codec.encode(&data, options);
            prop_assert_eq!(codec.decode(&text, options).unwrap(), data.clone());
            prop_assert_eq!(codec.try_decode(&text, options), Some(data.clone()));
        }
    }

    #[test]
    fn roundtrip_every_option_combination(
        data in prop::collection::vec(any::<u8>(), 0..200),
        bits in 0u16..256,
    ) {
        let options = options_from(bits);
        for codec in all_codecs() {
            if !consistent(codec, options) {
                continue;
            }
            let text = codec.encode(&data, options);
            prop_assert_eq!(codec.decode(&text, options).unwrap(), data.clone());
        }
    }

    #[test]
    fn chunked_contexts_match_whole_buffer(
        data in prop::collection::vec(any::<u8>(), 0..300),
        chunk in 1usize..17,
        wrap in any::<bool>(),
    ) {
        let options = if wrap { Options::WRAP } else { Options::NONE };
        for codec in block_codecs() {
            let mut encoder = codec.encoder(options).unwrap();
            let mut text = String::new();
            for piece in data.chunks(chunk) {
                encoder.feed(piece, &mut text);
            }
            encoder.finish(&mut text);
            prop_assert_eq!(&text, &codec.encode(&data, options));

            let mut decoder = codec.decoder(Options::NONE).unwrap();
            let mut bytes = Vec::new();
            let chars: Vec<char> = text.chars().collect();
            for piece in chars.chunks(chunk) {
                let piece: String = piece.iter().collect();
                decoder.feed(&piece, &mut bytes).unwrap();
            }
            decoder.finish(&mut bytes).unwrap();
            prop_assert_eq!(&bytes, &data);
        }
    }

    #[test]
    fn capacity_is_an_upper_bound(
        data in prop::collection::vec(any::<u8>(), 0..300),
        bits in 0u16..256,
    ) {
        let options = options_from(bits);
        for codec in all_codecs() {
            let text = codec.encode(&data, options);
            let chars = text.chars().count();
            prop_assert!(chars <= codec.max_char_count(data.len(), options));
            if consistent(codec, options) {
                let decoded = codec.decode(&text, options).unwrap();
                prop_assert!(decoded.len() <= codec.max_byte_count(chars, options));
            }
        }
    }

    #[test]
    fn pad_and_unpad_are_idempotent(
        data in prop::collection::vec(any::<u8>(), 0..64),
        unpad in any::<bool>(),
    ) {
        let options = if unpad { Options::UNPAD } else { Options::NONE };
        for codec in all_codecs() {
            let text = codec.encode(&data, options);
            let padded = codec.pad(&text);
            let stripped = codec.unpad(&text);
            prop_assert_eq!(codec.pad(&padded), padded.clone());
            prop_assert_eq!(codec.unpad(&stripped), stripped.clone());
            prop_assert_eq!(codec.decode(&padded, Options::NONE).unwrap(), data.clone());
            prop_assert_eq!(codec.decode(&stripped, Options::NONE).unwrap(), data.clone());
        }
    }

    #[test]
    fn leading_zero_bytes_become_zero_symbols(
        zeros in 0usize..8,
        head in prop::option::of(1u8..=255),
        rest in prop::collection::vec(any::<u8>(), 0..24),
    ) {
        let mut data = vec![0u8; zeros];
        if let Some(head) = head {
            data.push(head);
            data.extend(&rest);
        }
        for codec in [Codec::base58(), Codec::base58_flickr(), Codec::base58_ripple()] {
            let zero = codec.alphabet().symbol_at(0);
            let text = codec.encode(&data, Options::NONE);
            let run = text.chars().take_while(|&c| c == zero).count();
            prop_assert_eq!(run, zeros);
            prop_assert_eq!(codec.decode(&text, Options::NONE).unwrap(), data.clone());
        }
    }

    #[test]
    fn checksum_rejects_any_single_byte_corruption(
        payload in prop::collection::vec(any::<u8>(), 1..40),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let codec = Codec::base58();
        let text = codec.encode(&payload, Options::CHECKSUM);
        let mut raw = codec.decode(&text, Options::NONE).unwrap();
        let i = index.index(raw.len());
        raw[i] ^= flip;
        let tampered = codec.encode(&raw, Options::NONE);
        prop_assert!(codec.decode(&tampered, Options::CHECKSUM).is_err());
    }
}
