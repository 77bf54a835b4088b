#[cfg(test)]
mod tests {
    use crate::base64::{DecodeError, decode, encode, verify};
    use proptest::prelude::*;

    #[test]
    fn test_literal_fixtures() {
        assert_eq!(encode(b"hello"), "aGVsbG8=");
        assert_eq!(decode(b"aGVsbG8=").unwrap(), b"hello");
        assert_eq!(encode(b"world"), "d29ybGQ=");
        assert_eq!(decode(b"d29ybGQ=").unwrap(), b"world");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(b""), "");
        assert_eq!(decode(b"").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_padding_lengths() {
        // One, two, and zero padding chars depending on input length mod 3.
        assert_eq!(encode(b"a"), "YQ==");
        assert_eq!(encode(b"ab"), "YWI=");
        assert_eq!(encode(b"abc"), "YWJj");
        assert_eq!(decode(b"YQ==").unwrap(), b"a");
        assert_eq!(decode(b"YWI=").unwrap(), b"ab");
        assert_eq!(decode(b"YWJj").unwrap(), b"abc");
    }

    #[test]
    fn test_round_trip_non_multiple_of_three() {
        for len in 0..=32usize {
            let input: Vec<u8> = (0..len).map(|i| (i * 37 % 256) as u8).collect();
            let encoded = encode(&input);
            assert_eq!(encoded.len() % 4, 0, "len {len}");
            assert_eq!(decode(encoded.as_bytes()).unwrap(), input, "len {len}");
        }
    }

    #[test]
    fn test_invalid_character_rejected() {
        let err = decode(b"aGVs!G8=").unwrap_err();
        assert_eq!(err, DecodeError::InvalidByte { byte: b'!', index: 4 });
    }

    #[test]
    fn test_invalid_length_rejected() {
        assert_eq!(decode(b"aGVsbG8").unwrap_err(), DecodeError::InvalidLength(7));
        assert_eq!(decode(b"a").unwrap_err(), DecodeError::InvalidLength(1));
    }

    #[test]
    fn test_excessive_padding_rejected() {
        assert_eq!(decode(b"Y===").unwrap_err(), DecodeError::InvalidPadding);
        assert_eq!(decode(b"====").unwrap_err(), DecodeError::InvalidPadding);
    }

    #[test]
    fn test_interior_padding_rejected() {
        let err = decode(b"aG=sbG8=").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidByte { byte: b'=', .. }));
    }

    #[test]
    fn test_verify_passes() {
        assert!(verify().is_ok());
    }

    proptest! {
        #[test]
        fn test_round_trip_law(input in prop::collection::vec(any::<u8>(), 0..1024)) {
            let encoded = encode(&input);
            prop_assert_eq!(encoded.len() % 4, 0);
            prop_assert_eq!(decode(encoded.as_bytes()).unwrap(), input);
        }

        #[test]
        fn test_decode_never_panics(input in prop::collection::vec(any::<u8>(), 0..256)) {
            // Arbitrary bytes either decode or signal DecodeError.
            let _ = decode(&input);
        }
    }
}
