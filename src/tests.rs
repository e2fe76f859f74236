use crate::{Codec, CodecRegistry, ConfigError, DecodeError, ErrorKind, Error, Options, decode, encode};

fn codec(name: &str) -> Codec {
    CodecRegistry::load_default().unwrap().codec(name).unwrap()
}

#[test]
fn test_encode_decode_empty() {
    for name in ["base16", "base24", "base64", "base58"] {
        let codec = codec(name);
        assert_eq!(encode(b"", &codec), "");
        assert!(decode("", &codec).unwrap().is_empty());
    }
}

#[test]
fn test_base16_scenario() {
    let hex = Codec::base16();
    assert_eq!(hex.encode(&[0x00, 0xFF], Options::PURE), "00FF");
    assert_eq!(hex.decode("00ff", Options::RELAX).unwrap(), [0x00, 0xFF]);
    assert_eq!(Codec::base16_lower().encode(&[0xAB], Options::NONE), "ab");
}

#[test]
fn test_base16_odd_length_under_pure() {
    let err = Codec::base16().decode("0", Options::PURE).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidLength { .. }));
    assert!(err.to_string().contains("odd character count"));
}

#[test]
fn test_base64_man() {
    assert_eq!(Codec::base64().encode(&[0x4D, 0x61, 0x6E], Options::NONE), "TWFu");
    assert_eq!(Codec::base64_url().encode(&[0xFB, 0xFF], Options::UNPAD), "-_8");
}

#[test]
fn test_base24_single_zero_byte_is_two_symbols() {
    let kuon = Codec::base24();
    assert_eq!(kuon.encode(&[0], Options::UNPAD), "ZZ");
    assert_eq!(kuon.encode(&[0], Options::NONE), "ZZ=====");
    assert_eq!(kuon.decode("ZZ", Options::NONE).unwrap(), [0]);
}

#[test]
fn test_base24_minimal_partials() {
    let kuon = Codec::base24();
    assert_eq!(kuon.encode(&[0xFF], Options::UNPAD), "H7");
    assert_eq!(kuon.encode(&[0xFF, 0xFF], Options::UNPAD), "B8R7");
    assert_eq!(kuon.encode(&[0xFF, 0xFF, 0xFF], Options::UNPAD), "CCK7C7");
    assert_eq!(kuon.encode(&[0xFF; 4], Options::UNPAD), "X5GGBH7");
}

#[test]
fn test_base58check_address() {
    let payload = hex::decode("00010966776006953D5567439E5E39F86A0D273BEE").unwrap();
    let base58 = Codec::base58();

    let address = base58.encode(&payload, Options::CHECKSUM);
    assert_eq!(address, "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
    assert_eq!(base58.decode(&address, Options::CHECKSUM).unwrap(), payload);

    // flip one bit of the 25-byte checksummed form and re-encode it
    let mut raw = base58.decode(&address, Options::NONE).unwrap();
    assert_eq!(raw.len(), 25);
    raw[10] ^= 0x01;
    let tampered = base58.encode(&raw, Options::NONE);
    let err = base58.decode(&tampered, Options::CHECKSUM).unwrap_err();
    assert!(matches!(err, DecodeError::ChecksumMismatch { .. }));
}

#[test]
fn test_base58_variants_differ() {
    let data = b"variant";
    let bitcoin = Codec::base58().encode(data, Options::NONE);
    let flickr = Codec::base58_flickr().encode(data, Options::NONE);
    let ripple = Codec::base58_ripple().encode(data, Options::NONE);
    assert_ne!(bitcoin, flickr);
    assert_ne!(bitcoin, ripple);
    assert_eq!(Codec::base58_flickr().decode(&flickr, Options::NONE).unwrap(), data);
    assert_eq!(Codec::base58_ripple().decode(&ripple, Options::NONE).unwrap(), data);
    // ripple's zero symbol is 'r'
    assert_eq!(Codec::base58_ripple().encode(&[0, 0], Options::NONE), "rr");
}

#[test]
fn test_leading_zero_preservation() {
    let data = [0u8, 0, 0, 42, 0];
    let text = Codec::base58().encode(&data, Options::NONE);
    assert!(text.starts_with("111"));
    assert!(!text[3..].starts_with('1'));
    assert_eq!(Codec::base58().decode(&text, Options::NONE).unwrap(), data);
}

#[test]
fn test_error_kinds() {
    let format: Error = Codec::base64().decode("!!!!", Options::NONE).unwrap_err().into();
    assert_eq!(format.kind(), ErrorKind::Format);

    let config: Error = Codec::base58().encoder(Options::NONE).unwrap_err().into();
    assert_eq!(config.kind(), ErrorKind::Configuration);

    let io: Error = std::io::Error::other("boom").into();
    assert_eq!(io.kind(), ErrorKind::Io);
}

#[test]
fn test_try_decode_only_hides_format_errors() {
    assert_eq!(Codec::base16().try_decode("zz", Options::NONE), None);
    // configuration problems surface before any decode can happen
    let alphabet = crate::Alphabet::new("01").unwrap();
    assert!(matches!(
        Codec::new(crate::Profile::Base64, alphabet),
        Err(ConfigError::AlphabetSize { .. })
    ));
}

#[test]
fn test_options_from_names() {
    let mut options = Options::NONE;
    for name in ["wrap", "no-padding", "checksum"] {
        options |= Options::from_name(name).unwrap();
    }
    assert!(options.contains(Options::WRAP | Options::UNPAD | Options::CHECKSUM));
    assert_eq!(Options::from_name("sparkle"), None);
}

#[test]
fn test_compress_flag_is_advisory() {
    let data = b"compress me, or not";
    for codec in [Codec::base16(), Codec::base24(), Codec::base64(), Codec::base58()] {
        assert_eq!(
            codec.encode(data, Options::COMPRESS),
            codec.encode(data, Options::NONE)
        );
    }
}

#[test]
fn test_block_codecs_ignore_checksum() {
    assert_eq!(Codec::base64().encode(b"Man", Options::CHECKSUM), "TWFu");
    assert_eq!(Codec::base64().decode("TWFu", Options::CHECKSUM).unwrap(), b"Man");
}

#[test]
fn test_capacity_covers_real_output() {
    let data: Vec<u8> = (0..=200u8).collect();
    let options = [
        Options::NONE,
        Options::UNPAD,
        Options::WRAP,
        Options::INDENT,
        Options::WRAP | Options::INDENT,
        Options::CHECKSUM,
    ];
    for codec in [Codec::base16(), Codec::base24(), Codec::base64(), Codec::base58()] {
        for opts in options {
            for n in [0, 1, 2, 3, 4, 5, 57, 58, 201] {
                let text = codec.encode(&data[..n.min(data.len())], opts);
                let chars = text.chars().count();
                assert!(chars <= codec.max_char_count(n, opts), "{} {} {}", codec.profile(), opts, n);
                assert!(n <= codec.max_byte_count(chars, opts));
            }
        }
    }
}

#[test]
fn test_radix_256_decodes_its_last_symbol() {
    let symbols: String = (0x100..0x200).filter_map(char::from_u32).collect();
    let alphabet = crate::Alphabet::new(&symbols).unwrap();
    let codec = Codec::new(crate::Profile::positional(256).unwrap(), alphabet).unwrap();

    let data = [0x01, 0xFF];
    let text = codec.encode(&data, Options::NONE);
    assert_eq!(text, "\u{101}\u{1FF}");
    assert_eq!(codec.decode(&text, Options::NONE).unwrap(), data);

    let data = [0x00, 0xFF, 0xFF, 0x00, 0xFF];
    let text = codec.encode(&data, Options::CHECKSUM);
    assert_eq!(codec.decode(&text, Options::CHECKSUM).unwrap(), data);
}

#[test]
fn test_registry_base16_with_letter_symbols() {
    let registry = CodecRegistry::from_toml(
        r#"
[codecs.letters]
profile = "base16"
symbols = "ABCDEFGHIJKLMNOP"
"#,
    )
    .unwrap();
    let codec = registry.codec("letters").unwrap();
    let data = [0x10, 0xBA, 0xFF];
    let text = codec.encode(&data, Options::NONE);
    assert_eq!(text, "BALKPP");
    assert_eq!(codec.decode(&text, Options::NONE).unwrap(), data);
    assert_eq!(codec.decode(&text, Options::PURE).unwrap(), data);
}
