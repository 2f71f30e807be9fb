//! Multibase registry lookups
//!
//! Multibase is a protocol for self-describing base encodings.
//! The first character indicates the encoding used.
//!
//! See: <https://github.com/multiformats/multibase>

use multibase::Base;

use crate::error::{EncodingError, Result};

/// Canonical multibase names accepted in encoding options, paired with
/// the base each one selects.
pub const SUPPORTED_BASES: &[(&str, Base)] = &[
    ("identity", Base::Identity),
    ("base2", Base::Base2),
    ("base8", Base::Base8),
    ("base10", Base::Base10),
    ("base16", Base::Base16Lower),
    ("base16upper", Base::Base16Upper),
    ("base32", Base::Base32Lower),
    ("base32upper", Base::Base32Upper),
    ("base32pad", Base::Base32PadLower),
    ("base32padupper", Base::Base32PadUpper),
    ("base32hex", Base::Base32HexLower),
    ("base32hexupper", Base::Base32HexUpper),
    ("base32hexpad", Base::Base32HexPadLower),
    ("base32hexpadupper", Base::Base32HexPadUpper),
    ("base32z", Base::Base32Z),
    ("base36", Base::Base36Lower),
    ("base36upper", Base::Base36Upper),
    ("base58flickr", Base::Base58Flickr),
    ("base58btc", Base::Base58Btc),
    ("base64", Base::Base64),
    ("base64pad", Base::Base64Pad),
    ("base64url", Base::Base64Url),
    ("base64urlpad", Base::Base64UrlPad),
];

/// Look up a base by its canonical name. A one-character name is treated
/// as a code character instead, so `"z"` and `"base58btc"` select the
/// same base.
pub fn base_by_name(name: &str) -> Result<Base> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => base_by_code(code),
        _ => SUPPORTED_BASES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, base)| *base)
            .ok_or_else(|| EncodingError::UnknownBase(name.to_string())),
    }
}

/// Look up a base by its multibase code character.
pub fn base_by_code(code: char) -> Result<Base> {
    Base::from_code(code).map_err(|_| EncodingError::UnknownBase(code.to_string()))
}

/// The canonical name of a base.
pub fn base_name(base: Base) -> Option<&'static str> {
    SUPPORTED_BASES
        .iter()
        .find(|(_, b)| *b == base)
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(base_by_name("base58btc").unwrap(), Base::Base58Btc);
        assert_eq!(base_by_name("base32").unwrap(), Base::Base32Lower);
        assert_eq!(base_by_name("base16upper").unwrap(), Base::Base16Upper);
    }

    #[test]
    fn test_lookup_by_code_character() {
        assert_eq!(base_by_name("z").unwrap(), Base::Base58Btc);
        assert_eq!(base_by_name("b").unwrap(), Base::Base32Lower);
        assert_eq!(base_by_code('f').unwrap(), Base::Base16Lower);
        assert_eq!(base_by_code('u').unwrap(), Base::Base64Url);
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(
            base_by_name("base1337").unwrap_err(),
            EncodingError::UnknownBase(name) if name == "base1337"
        ));
    }

    #[test]
    fn test_unknown_code() {
        assert!(matches!(
            base_by_name("@").unwrap_err(),
            EncodingError::UnknownBase(_)
        ));
    }

    #[test]
    fn test_empty_name() {
        assert!(matches!(
            base_by_name("").unwrap_err(),
            EncodingError::UnknownBase(_)
        ));
    }

    #[test]
    fn test_registry_is_consistent() {
        for (name, base) in SUPPORTED_BASES {
            assert_eq!(base_by_name(name).unwrap(), *base);
            assert_eq!(base_by_code(base.code()).unwrap(), *base);
            assert_eq!(base_name(*base), Some(*name));
        }
    }
}
