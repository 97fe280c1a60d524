#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Adversarial message patterns for stress testing the verifier.

/// Returns message patterns that exercise boundary behavior in the
/// hashing and rejection paths: the empty message, long zero runs,
/// all-ones blocks to probe modular reductions, and alternating-bit
/// payloads.
#[must_use]
pub fn edge_messages() -> Vec<Vec<u8>> {
    let mut high_bit_prefix = vec![0x80];
    high_bit_prefix.extend(std::iter::repeat(0u8).take(64));

    let mut alternating = vec![0xaa; 64];
    alternating.extend(std::iter::repeat(0x55u8).take(64));

    vec![
        Vec::new(),
        vec![0u8; 512],
        vec![0x00, 0x01, 0x02, 0x03, 0x04],
        vec![0xff; 128],
        b"The quick brown fox jumps over the lazy dog.".to_vec(),
        high_bit_prefix,
        alternating,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_empty_and_patterned_messages() {
        let msgs = edge_messages();
        assert_eq!(msgs.len(), 7);
        assert!(msgs[0].is_empty());
        assert_eq!(msgs[1], vec![0u8; 512]);
        assert_eq!(msgs[3], vec![0xff; 128]);
        assert_eq!(msgs[5].len(), 65);
        assert_eq!(msgs[5][0], 0x80);
        assert_eq!(msgs[6].len(), 128);
    }
}
