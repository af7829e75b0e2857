//! Ethereum JSON-RPC client adapter built on ethers.
//!
//! One RPC call per operation against a fixed mainnet endpoint, default
//! HTTP transport. Message verification is local recovery and makes no
//! network call.

use anyhow::{anyhow, Result};
use ethers::providers::{Http, Middleware, Provider};
use ethers::types::{Address, Signature, Transaction, H256};
use ethers::types::U256;

/// Ethereum mainnet JSON-RPC endpoint.
pub const ETH_RPC_ENDPOINT: &str = "https://eth.llamarpc.com";

/// Client for Ethereum-compatible chains. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EthClient {
    provider: Provider<Http>,
}

impl EthClient {
    pub fn new(rpc_url: &str) -> Result<Self> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| anyhow!("failed to create HTTP provider: {}", e))?;
        Ok(Self { provider })
    }

    /// Client against the fixed mainnet endpoint.
    pub fn mainnet() -> Result<Self> {
        Self::new(ETH_RPC_ENDPOINT)
    }

    /// Balance of an address at the latest block, in wei.
    pub async fn balance(&self, address: Address) -> Result<U256> {
        self.provider
            .get_balance(address, None)
            .await
            .map_err(|e| anyhow!("failed to fetch balance: {}", e))
    }

    /// Transaction by hash; `None` when the node does not know it.
    pub async fn transaction(&self, hash: H256) -> Result<Option<Transaction>> {
        self.provider
            .get_transaction(hash)
            .await
            .map_err(|e| anyhow!("failed to fetch transaction: {}", e))
    }

    /// Number of blocks on top of the transaction's block, inclusive.
    /// Zero when the transaction is pending or unknown.
    pub async fn transaction_confirmations(&self, hash: H256) -> Result<u64> {
        let transaction = self.transaction(hash).await?;

        let Some(block_number) = transaction.and_then(|tx| tx.block_number) else {
            return Ok(0);
        };

        let latest = self
            .provider
            .get_block_number()
            .await
            .map_err(|e| anyhow!("failed to fetch block number: {}", e))?;

        Ok(latest.saturating_sub(block_number).as_u64() + 1)
    }
}

/// EIP-191 personal message verification: recover the signer from the
/// signature and compare against the expected address.
pub fn verify_personal_message(address: Address, message: &str, signature: &Signature) -> bool {
    signature.verify(message, address).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::signers::{LocalWallet, Signer};

    #[tokio::test]
    async fn personal_message_roundtrip() {
        let wallet = LocalWallet::new(&mut rand::thread_rng());
        let message = "gateway test message";
        let signature = wallet.sign_message(message).await.unwrap();

        assert!(verify_personal_message(wallet.address(), message, &signature));

        let other = LocalWallet::new(&mut rand::thread_rng());
        assert!(!verify_personal_message(other.address(), message, &signature));
    }
}
