use alloy_primitives::{Address, Bytes, TxKind};
use alloy_provider::Provider;
use alloy_rpc_types::{TransactionInput, TransactionRequest};
use async_trait::async_trait;
use eyre::Result;

/// Read-only contract call returning the raw (still ABI-encoded) result.
#[async_trait]
pub trait ChainQuery: Send + Sync {
    async fn call(&self, to: Address, call_data: Bytes) -> Result<Bytes>;
}

#[derive(Clone)]
pub struct ProviderChainQuery<P> {
    client: P,
}

impl<P: Provider> ProviderChainQuery<P> {
    pub fn new(client: P) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<P: Provider + Send + Sync> ChainQuery for ProviderChainQuery<P> {
    async fn call(&self, to: Address, call_data: Bytes) -> Result<Bytes> {
        let request = TransactionRequest {
            to: Some(TxKind::Call(to)),
            input: TransactionInput::new(call_data),
            ..TransactionRequest::default()
        };
        let ret = self.client.call(&request).await?;
        Ok(ret)
    }
}
