//! # CLI Interface
//!
//! Defines the command-line argument structure for `waves-signer` using
//! `clap` derive. Every signing subcommand builds one transaction (or
//! order), signs it offline and prints the result as JSON on stdout.

use clap::{Args, Parser, Subcommand};

/// Offline signer for Waves transactions and matcher orders.
///
/// Key material is read from `--seed` / `--private-key` or from the
/// `WAVES_SEED` / `WAVES_PRIVATE_KEY` environment variables. Nothing is
/// ever sent to the network.
#[derive(Parser, Debug)]
#[command(
    name = "waves-signer",
    about = "Offline Waves transaction and order signer",
    version,
    propagate_version = true
)]
pub struct SignerCli {
    /// Network preset: mainnet, testnet or stagenet (or W, T, S).
    #[arg(long, short = 'n', global = true, env = "WAVES_NETWORK", default_value = "mainnet")]
    pub network: String,

    /// Log output format on stderr: pretty or json.
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: String,

    /// Default log filter when `RUST_LOG` is unset.
    #[arg(long, global = true, default_value = "waves_signer=info,waves_protocol=info")]
    pub log_level: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the public key and address for a seed or private key.
    Keys(KeysArgs),
    /// Print the transaction type registry.
    Types,
    /// Register an alias for the signing account.
    Alias(AliasArgs),
    /// Burn units of an issued asset.
    Burn(BurnArgs),
    /// Lease WAVES to a node.
    Lease(LeaseArgs),
    /// Cancel an active lease.
    LeaseCancel(LeaseCancelArgs),
    /// Transfer WAVES or an issued asset.
    Transfer(TransferArgs),
    /// Send one asset to many recipients.
    MassTransfer(MassTransferArgs),
    /// Issue more units of a reissuable asset.
    Reissue(ReissueArgs),
    /// Enable or cancel fee sponsorship for an asset.
    Sponsorship(SponsorshipArgs),
    /// Sign a matcher order.
    Order(OrderArgs),
}

/// Where signing keys come from. A seed wins when both are present.
#[derive(Args, Debug, Clone)]
pub struct KeyArgs {
    /// Seed phrase of the signing account.
    #[arg(long, env = "WAVES_SEED", hide_env_values = true)]
    pub seed: Option<String>,

    /// Base58 private key of the signing account.
    #[arg(long, env = "WAVES_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
}

/// Header fields shared by every transaction subcommand. Unset values are
/// filled in by the signer.
#[derive(Args, Debug, Clone)]
pub struct TxArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Fee in wavelets. Defaults to the network minimum.
    #[arg(long)]
    pub fee: Option<u64>,

    /// Unix time in milliseconds. Defaults to now.
    #[arg(long)]
    pub timestamp: Option<u64>,

    /// Layout version. Defaults to the newest one the kind supports.
    #[arg(id = "tx_version", long = "tx-version")]
    pub version: Option<u8>,

    /// Sender public key, for signing on behalf of a multi-signature account.
    #[arg(long)]
    pub sender_public_key: Option<String>,

    /// Extra seeds co-signing the transaction, one proof each.
    #[arg(long = "cosigner-seed")]
    pub cosigner_seeds: Vec<String>,
}

#[derive(Args, Debug)]
pub struct KeysArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Account nonce used when deriving from a seed.
    #[arg(long, default_value_t = 0)]
    pub nonce: u32,

    /// Also print the base58 private key.
    #[arg(long)]
    pub show_private_key: bool,
}

#[derive(Args, Debug)]
pub struct AliasArgs {
    /// Alias name, 4 to 30 characters of `-.0-9@_a-z`.
    pub alias: String,

    #[command(flatten)]
    pub tx: TxArgs,
}

#[derive(Args, Debug)]
pub struct BurnArgs {
    #[arg(long)]
    pub asset_id: String,

    #[arg(long)]
    pub quantity: u64,

    #[command(flatten)]
    pub tx: TxArgs,
}

#[derive(Args, Debug)]
pub struct LeaseArgs {
    /// Address or `alias:<chain>:<name>`.
    #[arg(long)]
    pub recipient: String,

    #[arg(long)]
    pub amount: u64,

    #[command(flatten)]
    pub tx: TxArgs,
}

#[derive(Args, Debug)]
pub struct LeaseCancelArgs {
    #[arg(long)]
    pub lease_id: String,

    #[command(flatten)]
    pub tx: TxArgs,
}

#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Address or `alias:<chain>:<name>`.
    #[arg(long)]
    pub recipient: String,

    #[arg(long)]
    pub amount: u64,

    #[arg(long, default_value = "WAVES")]
    pub asset_id: String,

    #[arg(long, default_value = "WAVES")]
    pub fee_asset_id: String,

    /// Plain-text attachment, at most 140 bytes.
    #[arg(long, default_value = "")]
    pub attachment: String,

    #[command(flatten)]
    pub tx: TxArgs,
}

#[derive(Args, Debug)]
pub struct MassTransferArgs {
    #[arg(long, default_value = "WAVES")]
    pub asset_id: String,

    /// One `RECIPIENT:AMOUNT` pair per flag.
    #[arg(long = "to", required = true)]
    pub transfers: Vec<String>,

    /// Plain-text attachment, at most 140 bytes.
    #[arg(long, default_value = "")]
    pub attachment: String,

    #[command(flatten)]
    pub tx: TxArgs,
}

#[derive(Args, Debug)]
pub struct ReissueArgs {
    #[arg(long)]
    pub asset_id: String,

    #[arg(long)]
    pub quantity: u64,

    /// Keep the asset reissuable afterwards.
    #[arg(long)]
    pub reissuable: bool,

    #[command(flatten)]
    pub tx: TxArgs,
}

#[derive(Args, Debug)]
pub struct SponsorshipArgs {
    #[arg(long)]
    pub asset_id: String,

    /// Minimum fee in asset units; zero cancels sponsorship.
    #[arg(long)]
    pub min_sponsored_asset_fee: u64,

    #[command(flatten)]
    pub tx: TxArgs,
}

#[derive(Args, Debug)]
pub struct OrderArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    #[arg(long)]
    pub matcher_public_key: String,

    #[arg(long, default_value = "WAVES")]
    pub amount_asset: String,

    #[arg(long, default_value = "WAVES")]
    pub price_asset: String,

    /// buy or sell.
    #[arg(long)]
    pub side: String,

    #[arg(long)]
    pub price: u64,

    #[arg(long)]
    pub amount: u64,

    #[arg(long)]
    pub timestamp: Option<u64>,

    /// Expiration in Unix milliseconds. Defaults to 29 days after the timestamp.
    #[arg(long)]
    pub expiration: Option<u64>,

    #[arg(long, default_value_t = 300_000)]
    pub matcher_fee: u64,

    /// Asset the matcher fee is paid in. Anything but WAVES selects the V3 layout.
    #[arg(long, default_value = "WAVES")]
    pub matcher_fee_asset: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        SignerCli::command().debug_assert();
    }

    #[test]
    fn parses_transfer() {
        let cli = SignerCli::try_parse_from([
            "waves-signer",
            "--network",
            "testnet",
            "transfer",
            "--recipient",
            "alias:T:bob1",
            "--amount",
            "100",
            "--seed",
            "some seed",
            "--fee",
            "200000",
        ])
        .unwrap();
        assert_eq!(cli.network, "testnet");
        match cli.command {
            Commands::Transfer(args) => {
                assert_eq!(args.recipient, "alias:T:bob1");
                assert_eq!(args.amount, 100);
                assert_eq!(args.asset_id, "WAVES");
                assert_eq!(args.tx.fee, Some(200_000));
                assert_eq!(args.tx.key.seed.as_deref(), Some("some seed"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn tx_version_flag_does_not_clash_with_version() {
        let cli = SignerCli::try_parse_from([
            "waves-signer",
            "sponsorship",
            "--asset-id",
            "x",
            "--min-sponsored-asset-fee",
            "5",
            "--tx-version",
            "1",
        ])
        .unwrap();
        match cli.command {
            Commands::Sponsorship(args) => assert_eq!(args.tx.version, Some(1)),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn mass_transfer_requires_a_recipient() {
        assert!(SignerCli::try_parse_from(["waves-signer", "mass-transfer"]).is_err());
    }
}
