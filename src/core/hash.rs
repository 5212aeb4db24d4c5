//! Value Hashing for Verification
//!
//! Provides deterministic digests over fixed-point values for:
//! - Cross-machine agreement checks (two runs, one digest)
//! - Replay validation
//!
//! Values are hashed in their packed 4-byte little-endian form, so the
//! digest depends only on sign and magnitude, never on host layout.

use sha2::{Digest, Sha256};

use super::fixed::FixedValue;

/// Hash output type (256 bits / 32 bytes)
pub type ValueDigest = [u8; 32];

/// Domain separator for simulation traces.
pub const TRACE_DOMAIN: &[u8] = b"SIGNMAG_FIXED_TRACE_V1";

/// Deterministic hasher for sequences of values.
///
/// Wraps SHA-256 with helpers for fixed-point types.
/// Order of updates is critical for determinism.
pub struct ValueHasher {
    hasher: Sha256,
}

impl ValueHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for simulation traces.
    pub fn for_trace() -> Self {
        Self::new(TRACE_DOMAIN)
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a fixed-point value (packed bits, little-endian).
    #[inline]
    pub fn update_value(&mut self, value: FixedValue) {
        self.update_u32(value.to_bits());
    }

    /// Update with a run of values.
    pub fn update_values(&mut self, values: &[FixedValue]) {
        for value in values {
            self.update_value(*value);
        }
    }

    /// Finalize and return the digest.
    pub fn finalize(self) -> ValueDigest {
        self.hasher.finalize().into()
    }
}

/// Digest a slice of values under a domain separator.
pub fn digest_values(domain: &[u8], values: &[FixedValue]) -> ValueDigest {
    let mut hasher = ValueHasher::new(domain);
    hasher.update_values(values);
    hasher.finalize()
}

/// Encode values for the wire: 4 bytes each, via `bincode`.
pub fn encode_values(values: &[FixedValue]) -> bincode::Result<Vec<u8>> {
    bincode::serialize(values)
}

/// Decode values produced by [`encode_values`].
pub fn decode_values(bytes: &[u8]) -> bincode::Result<Vec<FixedValue>> {
    bincode::deserialize(bytes)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fx(f: f32) -> FixedValue {
        FixedValue::from_float(f)
    }

    #[test]
    fn test_hasher_determinism() {
        let make_hash = || {
            let mut hasher = ValueHasher::for_trace();
            hasher.update_u32(100);
            hasher.update_value(fx(5.5));
            hasher.update_values(&[fx(1.0), fx(-2.0)]);
            hasher.finalize()
        };

        assert_eq!(make_hash(), make_hash());
    }

    #[test]
    fn test_hash_order_matters() {
        let hash1 = digest_values(b"test", &[fx(1.0), fx(2.0)]);
        let hash2 = digest_values(b"test", &[fx(2.0), fx(1.0)]);
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_hash_sees_sign() {
        // `==` ignores sign, the digest does not
        let hash1 = digest_values(TRACE_DOMAIN, &[fx(3.0)]);
        let hash2 = digest_values(TRACE_DOMAIN, &[fx(-3.0)]);
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_domain_separation() {
        let values = [fx(1.0), fx(2.0)];
        assert_ne!(
            digest_values(b"DOMAIN_A", &values),
            digest_values(b"DOMAIN_B", &values)
        );
    }

    #[test]
    fn test_wire_encoding() {
        let values = vec![fx(0.5), fx(-7.25), FixedValue::MAX, FixedValue::MIN];
        let bytes = encode_values(&values).unwrap();
        // u64 length prefix + 4 bytes per value
        assert_eq!(bytes.len(), 8 + 4 * values.len());

        let decoded = decode_values(&bytes).unwrap();
        assert_eq!(
            digest_values(TRACE_DOMAIN, &decoded),
            digest_values(TRACE_DOMAIN, &values)
        );
    }

    #[test]
    fn test_truncated_wire_rejected() {
        let bytes = encode_values(&[fx(1.0), fx(2.0)]).unwrap();
        assert!(decode_values(&bytes[..bytes.len() - 1]).is_err());
    }
}
