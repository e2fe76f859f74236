//! Positional numeral codec: the payload is one big-endian unsigned integer
//! written in the alphabet's radix.
//!
//! Conversion is not decomposable per chunk, so this family has no streaming
//! context; callers hand over the whole input at once.

use crate::core::alphabet::Alphabet;
use crate::core::options::Options;
use crate::encoders::algorithms::errors::DecodeError;
use crate::features::checksum;
use num_bigint::BigUint;
use num_traits::Zero;

pub fn encode(data: &[u8], alphabet: &Alphabet, options: Options) -> String {
    if options.contains(Options::CHECKSUM) {
        let wrapped = checksum::append(data);
        return encode(&wrapped, alphabet, options - Options::CHECKSUM);
    }

    if data.is_empty() {
        return String::new();
    }

    // Each leading zero byte becomes one zero symbol
    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();
    let zero = alphabet.symbol_at(0);

    let mut result = String::with_capacity(leading_zeros + data.len() * 2);
    for _ in 0..leading_zeros {
        result.push(zero);
    }

    if leading_zeros == data.len() {
        return result;
    }

    let num = BigUint::from_bytes_be(&data[leading_zeros..]);
    for digit in num.to_radix_be(alphabet.len() as u32) {
        result.push(alphabet.symbol_at(digit as usize));
    }

    result
}

pub fn decode(encoded: &str, alphabet: &Alphabet, options: Options) -> Result<Vec<u8>, DecodeError> {
    let pure = options.contains(Options::PURE);
    let base = BigUint::from(alphabet.len());

    let mut num = BigUint::zero();
    let mut leading_zeros = 0;

    for (position, c) in encoded.chars().enumerate() {
        let digit = match alphabet.index_of(c) {
            Some(digit) => digit,
            None if !pure && c.is_ascii_whitespace() => continue,
            None => {
                return Err(DecodeError::invalid_character(
                    c,
                    position,
                    encoded,
                    position,
                    &alphabet.describe(),
                ));
            }
        };

        if num.is_zero() && digit == 0 {
            leading_zeros += 1;
        } else {
            num *= &base;
            num += BigUint::from(digit);
        }
    }

    let mut result = vec![0u8; leading_zeros];
    if !num.is_zero() {
        result.extend_from_slice(&num.to_bytes_be());
    }

    if options.contains(Options::CHECKSUM) {
        checksum::verify_and_strip(&mut result)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitcoin() -> Alphabet {
        Alphabet::new("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz").unwrap()
    }

    #[test]
    fn test_encode_known_values() {
        let alphabet = bitcoin();
        assert_eq!(encode(b"Hello World!", &alphabet, Options::NONE), "2NEpo7TZRRrLZSi2U");
        assert_eq!(encode(&[0x61], &alphabet, Options::NONE), "2g");
        assert_eq!(encode(&[0, 0, 1], &alphabet, Options::NONE), "112");
        assert_eq!(encode(&[0, 0], &alphabet, Options::NONE), "11");
        assert_eq!(encode(&[], &alphabet, Options::NONE), "");
    }

    #[test]
    fn test_decode_known_values() {
        let alphabet = bitcoin();
        assert_eq!(decode("2NEpo7TZRRrLZSi2U", &alphabet, Options::NONE).unwrap(), b"Hello World!");
        assert_eq!(decode("112", &alphabet, Options::NONE).unwrap(), [0, 0, 1]);
        assert_eq!(decode("111", &alphabet, Options::NONE).unwrap(), [0, 0, 0]);
        assert!(decode("", &alphabet, Options::NONE).unwrap().is_empty());
    }

    #[test]
    fn test_checksum_address() {
        let alphabet = bitcoin();
        let payload = hex::decode("00010966776006953D5567439E5E39F86A0D273BEE").unwrap();
        let address = encode(&payload, &alphabet, Options::CHECKSUM);
        assert_eq!(address, "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
        assert_eq!(decode(&address, &alphabet, Options::CHECKSUM).unwrap(), payload);

        // without the flag the checksum bytes come back verbatim
        let raw = decode(&address, &alphabet, Options::NONE).unwrap();
        assert_eq!(raw.len(), 25);
        assert_eq!(&raw[..21], &payload[..]);
    }

    #[test]
    fn test_checksum_rejects_typo() {
        let alphabet = bitcoin();
        let err = decode("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvN", &alphabet, Options::CHECKSUM).unwrap_err();
        assert!(matches!(err, DecodeError::ChecksumMismatch { .. }));
    }

    #[test]
    fn test_checksum_too_short() {
        let alphabet = bitcoin();
        assert_eq!(
            decode("2g", &alphabet, Options::CHECKSUM),
            Err(DecodeError::ChecksumTooShort { actual: 1 })
        );
    }

    #[test]
    fn test_whitespace_policy() {
        let alphabet = bitcoin();
        assert_eq!(decode(" 11 2\n", &alphabet, Options::NONE).unwrap(), [0, 0, 1]);
        assert!(matches!(
            decode("11 2", &alphabet, Options::PURE),
            Err(DecodeError::InvalidCharacter { char: ' ', position: 2, .. })
        ));
        // '0' is not part of the Bitcoin alphabet
        assert!(matches!(
            decode("10", &alphabet, Options::NONE),
            Err(DecodeError::InvalidCharacter { char: '0', .. })
        ));
    }
}
