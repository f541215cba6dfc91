//! Encoding of byte payloads as printable strings (a uuencode variant).
//!
//! Each 3-byte group is split into four 6-bit values, most-significant first,
//! and each value `v` maps to the output byte `0x60` when `v == 0` and
//! `v + 0x20` otherwise. The output therefore stays within `0x21..=0x60`:
//! printable ASCII with no control characters, quotes or backslashes, so the
//! result can be embedded verbatim inside a quoted string literal in
//! generated source text without escaping.
//!
//! The mapping is reversed with `(byte ^ 0x20) & 0x3F`; providing that
//! decoder is the consumer's responsibility.
//!
//! A tail of 1 input byte is padded with a zero byte and emitted as 2 output
//! bytes; a tail of 2 input bytes as 3 output bytes. The truncation is
//! lossless since 2 x 6 bits cover 8 bits and 3 x 6 bits cover 16 bits, so
//! the encoded length is `4 * (n / 3)` plus `0`, `2` or `3` for the tail.

fn map(v: u8) -> char {
    debug_assert!(v < 0x40);
    if v == 0 { '\x60' } else { (v + 0x20) as char }
}

/// Encode `src` into a printable string safe to embed in a quoted literal.
pub fn encode(src: &[u8]) -> String {
    let rem = src.len() % 3;
    let units = src.len() / 3;

    let mut dest = String::with_capacity(4 * units + if rem == 0 { 0 } else { rem + 1 });

    for group in src.chunks_exact(3) {
        dest.push(map(group[0] >> 2));
        dest.push(map(((group[0] & 0x03) << 4) | ((group[1] & 0xF0) >> 4)));
        dest.push(map(((group[1] & 0x0F) << 2) | ((group[2] & 0xC0) >> 6)));
        dest.push(map(group[2] & 0x3F));
    }

    if rem > 0 {
        let tail = &src[3 * units..];
        let a0 = tail[0];
        let a1 = if rem > 1 { tail[1] } else { 0 };

        dest.push(map(a0 >> 2));
        dest.push(map(((a0 & 0x03) << 4) | ((a1 & 0xF0) >> 4)));
        if rem > 1 {
            dest.push(map((a1 & 0x0F) << 2));
        }
    }

    dest
}

#[cfg(test)]
mod tests {
    use super::*;

    // the inverse transform owed by consumers of the encoded string
    fn decode(encoded: &str) -> Vec<u8> {
        let fields: Vec<u8> = encoded.bytes().map(|b| (b ^ 0x20) & 0x3F).collect();

        let mut out = Vec::new();
        for group in fields.chunks(4) {
            out.push((group[0] << 2) | (group[1] >> 4));
            if group.len() > 2 {
                out.push((group[1] << 4) | (group[2] >> 2));
            }
            if group.len() > 3 {
                out.push((group[2] << 6) | group[3]);
            }
        }
        out
    }

    #[test]
    fn encodes_classic_uuencode_vector() {
        assert_eq!(encode(b"Cat"), "0V%T");
    }

    #[test]
    fn encodes_empty_input_to_empty_string() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn maps_zero_fields_to_backtick() {
        assert_eq!(encode(&[0x00]), "``");
        assert_eq!(encode(&[0x00, 0x00, 0x00]), "````");
    }

    #[test]
    fn emits_two_chars_for_one_tail_byte() {
        assert_eq!(encode(&[0xFF]).len(), 2);
    }

    #[test]
    fn emits_three_chars_for_two_tail_bytes() {
        assert_eq!(encode(&[0xFF, 0xFF]).len(), 3);
    }

    #[test]
    fn output_length_matches_formula() {
        for n in 0..32usize {
            let src: Vec<u8> = (0..n as u8).collect();
            let expected = 4 * (n / 3) + if n % 3 == 0 { 0 } else { n % 3 + 1 };
            assert_eq!(encode(&src).len(), expected, "length mismatch for n={n}");
        }
    }

    #[test]
    fn output_stays_within_printable_range() {
        let src: Vec<u8> = (0..=255u8).collect();
        assert!(encode(&src).bytes().all(|b| (0x21..=0x60).contains(&b)));
    }

    #[test]
    fn round_trips_every_length_class() {
        for n in [0usize, 1, 2, 3, 4, 5, 6, 7, 254, 255, 256] {
            let src: Vec<u8> = (0..n).map(|i| (i * 37 % 256) as u8).collect();
            assert_eq!(decode(&encode(&src)), src, "round trip failed for n={n}");
        }
    }

    #[test]
    fn round_trips_all_byte_values() {
        let src: Vec<u8> = (0..=255u8).collect();
        assert_eq!(decode(&encode(&src)), src);
    }
}
