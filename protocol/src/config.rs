//! # Protocol Configuration & Constants
//!
//! Every magic number the encoder and signer rely on lives here, next to the
//! [`NetworkConfig`] that selects which chain a transaction targets.
//!
//! These values are part of the consensus contract. A node re-derives the
//! canonical bytes independently, so changing any of them silently produces
//! signatures the network will reject.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Chain Identifiers
// ---------------------------------------------------------------------------

/// Mainnet chain id: ASCII `W`.
pub const CHAIN_ID_MAINNET: u8 = b'W';

/// Testnet chain id: ASCII `T`.
pub const CHAIN_ID_TESTNET: u8 = b'T';

/// Stagenet chain id: ASCII `S`.
pub const CHAIN_ID_STAGENET: u8 = b'S';

// ---------------------------------------------------------------------------
// Versions
// ---------------------------------------------------------------------------

/// Default layout version for proof-based transactions.
pub const DEFAULT_TX_VERSION: u8 = 2;

/// Order layout used when the matcher fee is paid in the native asset.
pub const ORDER_VERSION_V2: u8 = 2;

/// Order layout used when the matcher fee is paid in an issued asset.
pub const ORDER_VERSION_V3: u8 = 3;

// ---------------------------------------------------------------------------
// Fees
// ---------------------------------------------------------------------------

/// Minimum transaction fee in wavelets (10^-8 WAVES).
pub const WAVES_MIN_FEE: u64 = 100_000;

/// Default matcher fee for exchange orders, in wavelets.
pub const DEFAULT_MATCHER_FEE: u64 = 300_000;

/// Ticker of the native asset. Accepted case-insensitively as an asset id.
pub const WAVES_ASSET_ID: &str = "WAVES";

// ---------------------------------------------------------------------------
// Key, Signature & Proof Sizes
// ---------------------------------------------------------------------------

/// Curve25519 public key length in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Curve25519 private key length in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Signature length in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Length of a decoded asset id or transaction id.
pub const DIGEST_LENGTH: usize = 32;

/// The network rejects transactions carrying more proofs than this.
pub const MAX_PROOFS: usize = 8;

/// Maximum size of a single proof in bytes.
pub const MAX_PROOF_SIZE: usize = 64;

// ---------------------------------------------------------------------------
// Addresses & Aliases
// ---------------------------------------------------------------------------

/// Address version byte.
pub const ADDRESS_VERSION: u8 = 1;

/// Decoded address length: version + chain id + 20-byte hash + 4-byte checksum.
pub const ADDRESS_LENGTH: usize = 26;

/// Length of the public key hash embedded in an address.
pub const ADDRESS_HASH_LENGTH: usize = 20;

/// Length of the address checksum.
pub const ADDRESS_CHECKSUM_LENGTH: usize = 4;

/// Minimum alias length in UTF-8 bytes.
pub const MIN_ALIAS_LENGTH: usize = 4;

/// Maximum alias length in UTF-8 bytes.
pub const MAX_ALIAS_LENGTH: usize = 30;

/// Characters an alias may contain.
pub const ALIAS_ALPHABET: &str = "-.0123456789@_abcdefghijklmnopqrstuvwxyz";

/// Marker that identifies a recipient string as an alias (`alias:T:name`).
pub const ALIAS_PREFIX: &str = "alias:";

// ---------------------------------------------------------------------------
// Transaction Limits
// ---------------------------------------------------------------------------

/// Maximum decoded attachment size for transfer transactions.
pub const MAX_ATTACHMENT_SIZE: usize = 140;

/// Maximum number of entries in a mass transfer.
pub const MAX_MASS_TRANSFER_RECIPIENTS: usize = 100;

/// Accepted distance between a transaction timestamp and "now", in
/// milliseconds. Nodes reject anything further than 1.5 hours away.
pub const TIMESTAMP_TOLERANCE_MS: u64 = 90 * 60 * 1_000;

// ---------------------------------------------------------------------------
// NetworkConfig
// ---------------------------------------------------------------------------

/// Network parameters injected into signing.
///
/// Replaces a process-wide environment: callers construct one explicitly
/// and hand it to the [`Signer`](crate::transaction::Signer), so tests can
/// pin any chain without touching global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Human-readable network name, mainly for logging.
    pub name: String,
    /// Chain id byte written into canonical bytes and addresses.
    pub chain_id: u8,
    /// Fee applied when a transaction is signed with `fee == 0`.
    pub min_fee: u64,
    /// Maximum distance between a transaction timestamp and the clock.
    pub timestamp_tolerance_ms: u64,
}

impl NetworkConfig {
    fn preset(name: &str, chain_id: u8) -> Self {
        Self {
            name: name.to_string(),
            chain_id,
            min_fee: WAVES_MIN_FEE,
            timestamp_tolerance_ms: TIMESTAMP_TOLERANCE_MS,
        }
    }

    pub fn mainnet() -> Self {
        Self::preset("mainnet", CHAIN_ID_MAINNET)
    }

    pub fn testnet() -> Self {
        Self::preset("testnet", CHAIN_ID_TESTNET)
    }

    pub fn stagenet() -> Self {
        Self::preset("stagenet", CHAIN_ID_STAGENET)
    }

    /// Looks up a preset by name or by its chain id letter.
    /// Returns `None` for unrecognized networks.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mainnet" | "main" | "w" => Some(Self::mainnet()),
            "testnet" | "test" | "t" => Some(Self::testnet()),
            "stagenet" | "stage" | "s" => Some(Self::stagenet()),
            _ => None,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Returns a friendly name for a chain id, mainly for logging.
pub fn network_name(chain_id: u8) -> String {
    match chain_id {
        CHAIN_ID_MAINNET => "mainnet".to_string(),
        CHAIN_ID_TESTNET => "testnet".to_string(),
        CHAIN_ID_STAGENET => "stagenet".to_string(),
        other => format!("unknown(0x{:02X})", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_ids_are_distinct() {
        assert_ne!(CHAIN_ID_MAINNET, CHAIN_ID_TESTNET);
        assert_ne!(CHAIN_ID_MAINNET, CHAIN_ID_STAGENET);
        assert_ne!(CHAIN_ID_TESTNET, CHAIN_ID_STAGENET);
        assert_eq!(CHAIN_ID_TESTNET, 84);
        assert_eq!(CHAIN_ID_MAINNET, 87);
    }

    #[test]
    fn test_presets() {
        assert_eq!(NetworkConfig::testnet().chain_id, b'T');
        assert_eq!(NetworkConfig::mainnet().min_fee, WAVES_MIN_FEE);
        assert_eq!(NetworkConfig::default(), NetworkConfig::mainnet());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(NetworkConfig::from_name("TESTNET"), Some(NetworkConfig::testnet()));
        assert_eq!(NetworkConfig::from_name("s"), Some(NetworkConfig::stagenet()));
        assert_eq!(NetworkConfig::from_name("devnet"), None);
    }

    #[test]
    fn test_network_name_formatting() {
        assert_eq!(network_name(CHAIN_ID_MAINNET), "mainnet");
        assert_eq!(network_name(0x01), "unknown(0x01)");
    }

    #[test]
    fn test_alias_bounds_sanity() {
        assert!(MIN_ALIAS_LENGTH < MAX_ALIAS_LENGTH);
        assert!(ALIAS_ALPHABET.is_ascii());
    }

    #[test]
    fn test_address_layout_adds_up() {
        assert_eq!(2 + ADDRESS_HASH_LENGTH + ADDRESS_CHECKSUM_LENGTH, ADDRESS_LENGTH);
    }

    #[test]
    fn test_network_config_serde_roundtrip() {
        let cfg = NetworkConfig::stagenet();
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("chainId"));
        let recovered: NetworkConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, recovered);
    }
}
