//! Caller identity helpers.
//!
//! Hosts identify callers by an opaque string. For hosts that authenticate
//! callers with Ed25519 keys, the identity is derived from the verifying
//! key as `ed25519::<hex(blake3(public_key))>`, which is stable across
//! transactions and does not expose the raw key in stored records.

use ed25519_dalek::VerifyingKey;

/// Prefix of identities derived from Ed25519 verifying keys.
pub const ED25519_IDENTITY_PREFIX: &str = "ed25519::";

/// Compute BLAKE3 hash of the input data.
pub fn hash_blake3(data: &[u8]) -> [u8; 32] {
    *blake3::hash(data).as_bytes()
}

/// Derive a caller identity string from an Ed25519 verifying key.
pub fn identity_from_public_key(public_key: &VerifyingKey) -> String {
    format!(
        "{ED25519_IDENTITY_PREFIX}{}",
        blake3::hash(public_key.as_bytes()).to_hex()
    )
}
