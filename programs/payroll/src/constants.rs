//! Program-wide constants.

/// Seed prefix for the stream record PDA.
pub const STREAM_SEED: &[u8] = b"stream";

/// Seed prefix for the vault token account PDA.
pub const VAULT_SEED: &[u8] = b"vault";
