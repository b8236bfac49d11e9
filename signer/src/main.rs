// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Waves Offline Signer
//!
//! Entry point for the `waves-signer` binary. Parses CLI arguments,
//! initializes logging, builds the requested transaction or order, signs it
//! with the system clock and prints the signed JSON to stdout.
//!
//! - `keys`       : derive public key and address
//! - `types`      : print the transaction type registry
//! - `alias` .. `sponsorship` : build and sign a transaction
//! - `order`      : build and sign a matcher order

mod cli;
mod logging;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::json;

use waves_protocol::config::{network_name, NetworkConfig};
use waves_protocol::encoding::base58;
use waves_protocol::transaction::{SignedTransaction, TransactionBuilder, TransferEntry};
use waves_protocol::{
    AssetId, AssetPair, KeyMaterial, Order, OrderType, Signer, SystemClock, TransactionType, WavesKeypair,
};

use cli::{Commands, KeyArgs, SignerCli, TxArgs};
use logging::LogFormat;

/// Default order lifetime when `--expiration` is omitted. The matcher
/// rejects anything beyond 30 days.
const DEFAULT_ORDER_LIFETIME_MS: u64 = 29 * 24 * 60 * 60 * 1_000;

fn main() -> Result<()> {
    let cli = SignerCli::parse();
    logging::init_logging(&cli.log_level, LogFormat::from_str_lossy(&cli.log_format));

    let network = NetworkConfig::from_name(&cli.network)
        .with_context(|| format!("unknown network {:?}", cli.network))?;
    tracing::debug!(network = %network.name, chain_id = network.chain_id, "network selected");
    let signer = Signer::system(network);

    match cli.command {
        Commands::Keys(args) => print_keys(&signer, args),
        Commands::Types => {
            print_types();
            Ok(())
        }
        Commands::Alias(args) => sign_and_print(&signer, TransactionBuilder::alias(args.alias), &args.tx),
        Commands::Burn(args) => sign_and_print(
            &signer,
            TransactionBuilder::burn(args.asset_id, args.quantity),
            &args.tx,
        ),
        Commands::Lease(args) => sign_and_print(
            &signer,
            TransactionBuilder::lease(args.recipient, args.amount),
            &args.tx,
        ),
        Commands::LeaseCancel(args) => {
            sign_and_print(&signer, TransactionBuilder::lease_cancel(args.lease_id), &args.tx)
        }
        Commands::Transfer(args) => {
            let builder = TransactionBuilder::transfer(args.recipient, AssetId::parse(&args.asset_id), args.amount)
                .fee_asset(AssetId::parse(&args.fee_asset_id))
                .attachment(base58::encode(args.attachment.as_bytes()));
            sign_and_print(&signer, builder, &args.tx)
        }
        Commands::MassTransfer(args) => {
            let transfers = args
                .transfers
                .iter()
                .map(|entry| parse_transfer_entry(entry))
                .collect::<Result<Vec<_>>>()?;
            let builder = TransactionBuilder::mass_transfer(AssetId::parse(&args.asset_id), transfers)
                .attachment(base58::encode(args.attachment.as_bytes()));
            sign_and_print(&signer, builder, &args.tx)
        }
        Commands::Reissue(args) => sign_and_print(
            &signer,
            TransactionBuilder::reissue(args.asset_id, args.quantity, args.reissuable),
            &args.tx,
        ),
        Commands::Sponsorship(args) => sign_and_print(
            &signer,
            TransactionBuilder::sponsorship(args.asset_id, args.min_sponsored_asset_fee),
            &args.tx,
        ),
        Commands::Order(args) => sign_order(&signer, args),
    }
}

/// Resolves `--seed` / `--private-key` into key material.
fn key_material(args: &KeyArgs) -> Result<KeyMaterial> {
    match (&args.seed, &args.private_key) {
        (Some(seed), _) => Ok(KeyMaterial::seed(seed.as_str())),
        (None, Some(key)) => Ok(KeyMaterial::private_key(key.as_str())),
        (None, None) => bail!("no key material: pass --seed or --private-key (or set WAVES_SEED / WAVES_PRIVATE_KEY)"),
    }
}

/// Parses `RECIPIENT:AMOUNT`, splitting on the last colon so aliases such
/// as `alias:T:bob:100` keep their prefix.
fn parse_transfer_entry(text: &str) -> Result<TransferEntry> {
    let (recipient, amount) = text
        .rsplit_once(':')
        .with_context(|| format!("expected RECIPIENT:AMOUNT, got {:?}", text))?;
    let amount: u64 = amount
        .parse()
        .with_context(|| format!("invalid amount in {:?}", text))?;
    Ok(TransferEntry::new(recipient, amount))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeysOutput {
    network: String,
    public_key: String,
    address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_key: Option<String>,
}

fn print_keys(signer: &Signer<SystemClock>, args: cli::KeysArgs) -> Result<()> {
    let keypair = match (&args.key.seed, &args.key.private_key) {
        (Some(seed), _) => WavesKeypair::from_seed_with_nonce(seed, args.nonce),
        _ => key_material(&args.key)?.keypair().context("invalid private key")?,
    };
    let chain_id = signer.network().chain_id;

    let output = KeysOutput {
        network: network_name(chain_id),
        public_key: keypair.public_key().to_base58(),
        address: keypair.address(chain_id).to_base58(),
        private_key: args.show_private_key.then(|| keypair.private_key_base58()),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_types() {
    for kind in TransactionType::ALL {
        let marker = if kind.is_reserved() { " (reserved)" } else { "" };
        println!("{:>2}  {}{}", kind.code(), kind.name(), marker);
    }
}

/// Applies the shared header flags, signs, adds co-signer proofs and prints
/// the result.
fn sign_and_print(signer: &Signer<SystemClock>, builder: TransactionBuilder, args: &TxArgs) -> Result<()> {
    let mut builder = builder.network(signer.network());
    if let Some(fee) = args.fee {
        builder = builder.fee(fee);
    }
    if let Some(timestamp) = args.timestamp {
        builder = builder.timestamp(timestamp);
    }
    if let Some(version) = args.version {
        builder = builder.version(version);
    }
    if let Some(sender) = &args.sender_public_key {
        builder = builder.sender_public_key(sender.as_str());
    }
    let tx = builder.build();

    let key = key_material(&args.key)?;
    let mut signed = signer
        .sign(&tx, &key)
        .with_context(|| format!("failed to sign {} transaction", tx.kind()))?;
    for seed in &args.cosigner_seeds {
        signed = signed
            .add_proof(&KeyMaterial::seed(seed.as_str()))
            .context("failed to add co-signer proof")?;
    }

    tracing::info!(kind = %signed.transaction().kind(), id = %signed.id(), proofs = signed.proofs().len(), "transaction signed");
    print_signed_transaction(&signed)
}

fn print_signed_transaction(signed: &SignedTransaction) -> Result<()> {
    let output = json!({
        "id": signed.id(),
        "proofs": signed.proofs(),
        "bodyBytes": hex::encode(signed.canonical_bytes()?),
        "transaction": signed,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn sign_order(signer: &Signer<SystemClock>, args: cli::OrderArgs) -> Result<()> {
    let side = OrderType::parse(&args.side)
        .with_context(|| format!("order side must be buy or sell, got {:?}", args.side))?;
    let keypair = key_material(&args.key)?.keypair().context("invalid key material")?;

    let timestamp = args.timestamp.unwrap_or_else(|| signer.now_millis());
    let expiration = args
        .expiration
        .unwrap_or_else(|| timestamp.saturating_add(DEFAULT_ORDER_LIFETIME_MS));

    let order = Order::new(
        args.matcher_public_key,
        AssetPair::new(AssetId::parse(&args.amount_asset), AssetId::parse(&args.price_asset)),
        side,
        args.price,
        args.amount,
    )
    .with_timestamp(timestamp)
    .with_expiration(expiration)
    .with_matcher_fee(args.matcher_fee)
    .with_matcher_fee_asset(AssetId::parse(&args.matcher_fee_asset));

    let signed = signer
        .sign_order(&order, &keypair.private_key_base58())
        .context("failed to sign order")?;
    tracing::info!(id = %signed.id(), version = signed.order().version, "order signed");

    let output = json!({
        "id": signed.id(),
        "bodyBytes": hex::encode(signed.order().canonical_bytes()?),
        "order": signed,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use waves_protocol::Recipient;

    #[test]
    fn transfer_entry_splits_on_last_colon() {
        let entry = parse_transfer_entry("alias:T:bob1:250").unwrap();
        assert_eq!(entry.recipient, Recipient::alias("bob1"));
        assert_eq!(entry.amount, 250);
    }

    #[test]
    fn transfer_entry_rejects_bad_amount() {
        assert!(parse_transfer_entry("3MxYz:ten").is_err());
        assert!(parse_transfer_entry("no-amount").is_err());
    }

    #[test]
    fn seed_wins_over_private_key() {
        let args = KeyArgs {
            seed: Some("a seed".into()),
            private_key: Some("ignored".into()),
        };
        let key = key_material(&args).unwrap();
        assert_eq!(
            key.public_key().unwrap(),
            WavesKeypair::from_seed("a seed").public_key()
        );
    }

    #[test]
    fn missing_key_material_is_an_error() {
        let args = KeyArgs {
            seed: None,
            private_key: None,
        };
        assert!(key_material(&args).is_err());
    }
}
