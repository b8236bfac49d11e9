//! Order signing and verification.

use serde::Serialize;
use tracing::debug;

use super::request::Order;
use crate::clock::Clock;
use crate::crypto::{PublicKey, SigningError, WavesKeypair, WavesSignature};
use crate::error::TransactionError;
use crate::transaction::Signer;

impl<C: Clock> Signer<C> {
    /// Signs an order with a base58 private key.
    ///
    /// Fills an empty sender key and a zero timestamp, pins `version` to
    /// the layout chosen by the fee asset, and replaces `proofs` with the
    /// single new signature. A preset sender key is kept as is. The input
    /// is left untouched.
    pub fn sign_order(&self, order: &Order, private_key: &str) -> Result<SignedOrder, TransactionError> {
        let keypair = WavesKeypair::from_private_key_base58(private_key)?;
        let public_key = keypair.public_key().to_base58();

        let mut order = order.clone();
        if order.sender_public_key.is_empty() {
            order.sender_public_key = public_key;
        } else if order.sender_public_key != public_key {
            debug!(sender = %order.sender_public_key, signer = %public_key, "signing order for another account");
        }
        if order.timestamp == 0 {
            order.timestamp = self.now_millis();
        }
        self.check_timestamp(order.timestamp)?;

        order.check_version()?;
        order.version = order.layout().version();

        let bytes = order.canonical_bytes()?;
        let signature = keypair.sign(&bytes).to_base58();
        order.proofs = vec![signature.clone()];

        let id = order.id()?;
        debug!(id = %id, version = order.version, side = %order.order_type, "order signed");
        Ok(SignedOrder { id, signature, order })
    }
}

/// An order carrying exactly one proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedOrder {
    id: String,
    signature: String,
    #[serde(flatten)]
    order: Order,
}

impl SignedOrder {
    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn into_order(self) -> Order {
        self.order
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn proofs(&self) -> &[String] {
        &self.order.proofs
    }
}

/// Checks the first proof against the order's sender key.
pub fn verify_order(order: &Order) -> Result<(), TransactionError> {
    let proof = order
        .proofs
        .first()
        .ok_or_else(|| TransactionError::constraint("proofs", "order is unsigned"))?;
    let sender = PublicKey::from_base58(&order.sender_public_key)?;
    let signature = WavesSignature::from_base58(proof)?;

    if sender.verify(&order.canonical_bytes()?, &signature) {
        Ok(())
    } else {
        Err(SigningError::VerificationFailed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::NetworkConfig;
    use crate::encoding::base58;
    use crate::order::{AssetPair, OrderType};
    use crate::transaction::AssetId;

    const NOW: u64 = 1_700_000_000_000;

    fn signer() -> Signer<FixedClock> {
        Signer::new(NetworkConfig::mainnet(), FixedClock(NOW))
    }

    fn private_key() -> String {
        WavesKeypair::from_seed("order seed").private_key_base58()
    }

    fn order() -> Order {
        Order::new(
            base58::encode(&[2u8; 32]),
            AssetPair::new(base58::encode(&[3u8; 32]), AssetId::Waves),
            OrderType::Buy,
            100,
            10,
        )
        .with_expiration(NOW + 86_400_000)
    }

    #[test]
    fn sign_order_fills_sender_and_timestamp() {
        let signed = signer().sign_order(&order(), &private_key()).unwrap();
        let o = signed.order();
        assert_eq!(o.timestamp, NOW);
        assert_eq!(o.sender_public_key, WavesKeypair::from_seed("order seed").public_key().to_base58());
        assert_eq!(signed.proofs(), &[signed.signature().to_string()]);
        assert_eq!(verify_order(o), Ok(()));
    }

    #[test]
    fn fee_asset_pins_version() {
        let s = signer();
        let v2 = s.sign_order(&order(), &private_key()).unwrap();
        assert_eq!(v2.order().version, 2);

        let v3 = s
            .sign_order(&order().with_matcher_fee_asset(base58::encode(&[4u8; 32])), &private_key())
            .unwrap();
        assert_eq!(v3.order().version, 3);
        assert_eq!(verify_order(v3.order()), Ok(()));
    }

    #[test]
    fn existing_proofs_are_replaced() {
        let mut o = order();
        o.proofs = vec!["stale".to_string(), "stale2".to_string()];
        let signed = signer().sign_order(&o, &private_key()).unwrap();
        assert_eq!(signed.proofs().len(), 1);
    }

    #[test]
    fn signing_is_deterministic() {
        let a = signer().sign_order(&order(), &private_key()).unwrap();
        let b = signer().sign_order(&order(), &private_key()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_private_key() {
        let err = signer().sign_order(&order(), "abc").unwrap_err();
        assert_eq!(err, TransactionError::Signing(SigningError::InvalidPrivateKey));
    }

    #[test]
    fn rejects_unsupported_version() {
        let err = signer().sign_order(&order().with_version(1), &private_key()).unwrap_err();
        assert!(matches!(err, TransactionError::UnsupportedVersion { kind: "Order", .. }));
    }

    #[test]
    fn tampered_order_fails_verification() {
        let mut o = signer().sign_order(&order(), &private_key()).unwrap().into_order();
        o.price += 1;
        assert_eq!(verify_order(&o), Err(TransactionError::Signing(SigningError::VerificationFailed)));
    }
}
