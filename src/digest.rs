//! SHA-256 digest transform.

use sha2::{Digest, Sha256};

/// Computes the SHA-256 digest of the UTF-8 bytes of `input`, rendered as
/// 64 lowercase hexadecimal characters in byte order.
///
/// Deterministic and total for any string input.
///
/// # Examples
///
/// ```
/// use textform::digest::digest_hex;
///
/// assert_eq!(
///     digest_hex(""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn digest_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(
            digest_hex("Hello, CryptoKit!"),
            "746e0151b9f045826c327b7a465b02e5fdf15d060eca2dcdd74827778aa1355b"
        );
        assert_eq!(
            digest_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_shape_and_stability() {
        let first = digest_hex("The quick brown fox jumps over the lazy dog");
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(
            first,
            digest_hex("The quick brown fox jumps over the lazy dog")
        );
    }
}
