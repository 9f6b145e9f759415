//! Output encodings for the generated prime.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rug::integer::Order;
use rug::Integer;

/// Big-endian magnitude bytes of n. Zero encodes to no bytes.
pub fn be_bytes(n: &Integer) -> Vec<u8> {
    n.to_digits::<u8>(Order::Msf)
}

/// Standard base-64 of the big-endian bytes.
pub fn base64(n: &Integer) -> String {
    STANDARD.encode(be_bytes(n))
}

/// Ascii85 of the big-endian bytes.
///
/// Each 4-byte group becomes five characters from '!' to 'u', a group of
/// four zero bytes shortens to 'z', and a trailing partial group of r bytes
/// emits r + 1 characters. No frame delimiters.
pub fn ascii85(n: &Integer) -> String {
    let bytes = be_bytes(n);
    let mut out = String::with_capacity(bytes.len() / 4 * 5 + 5);
    for chunk in bytes.chunks(4) {
        let mut group = [0u8; 4];
        group[..chunk.len()].copy_from_slice(chunk);
        let mut v = u32::from_be_bytes(group);
        if v == 0 && chunk.len() == 4 {
            out.push('z');
            continue;
        }
        let mut digits = [0u8; 5];
        for d in digits.iter_mut().rev() {
            *d = (v % 85) as u8;
            v /= 85;
        }
        for &d in digits.iter().take(chunk.len() + 1) {
            out.push(char::from(b'!' + d));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_bytes(b: &[u8]) -> Integer {
        Integer::from_digits(b, Order::Msf)
    }

    #[test]
    fn be_bytes_round_trips() {
        let n = from_bytes(&[0x93, 0x5a, 0x53, 0xf3, 0x89]);
        assert_eq!(be_bytes(&n), vec![0x93, 0x5a, 0x53, 0xf3, 0x89]);
        assert!(be_bytes(&Integer::new()).is_empty());
    }

    #[test]
    fn base64_known_vector() {
        // "Man" in bytes.
        let n = from_bytes(b"Man");
        assert_eq!(base64(&n), "TWFu");
    }

    #[test]
    fn ascii85_known_vectors() {
        // The classic Adobe vector: "Man " encodes to "9jqo^".
        assert_eq!(ascii85(&from_bytes(b"Man ")), "9jqo^");
        // "sure" is another full group.
        assert_eq!(ascii85(&from_bytes(b"sure")), "F*2M7");
        // Partial trailing group: 1 byte emits 2 characters.
        assert_eq!(ascii85(&from_bytes(b"M")).len(), 2);
        // 5 bytes: one full group plus a 1-byte tail.
        assert_eq!(ascii85(&from_bytes(b"Man M")).len(), 7);
    }

    #[test]
    fn ascii85_zero_group_shorthand() {
        // 0x01 00 00 00 00: the trailing four zero bytes form a 'z' group
        // only when aligned; here the groups are [01 00 00 00] [00].
        let n = Integer::from(1u32) << 32u32;
        let s = ascii85(&n);
        assert_eq!(s.len(), 7);
        assert!(!s.contains('z'));
        // 1 << 64 is nine bytes: [01 00 00 00] [00 00 00 00] [00]; the
        // aligned all-zero middle group shortens to 'z'.
        let n = Integer::from(1u32) << 64u32;
        let s = ascii85(&n);
        assert_eq!(s.len(), 5 + 1 + 2);
        assert!(s.contains('z'));
    }
}
