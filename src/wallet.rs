use async_jsonrpc_client::HttpTransport;
use async_jsonrpc_client::{Params, Transport};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt;

/// A JSON-RPC envelope as handed to a wallet provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest {
    pub method: String,
    pub params: Value,
    pub id: u64,
}

/// Something that can forward requests to a user's wallet.
///
/// `Err` carries whatever the wallet reported as the call error, `Ok` the
/// raw result value.
#[async_trait]
pub trait WalletProvider {
    async fn send_async(&self, request: &RpcRequest) -> Result<Value, Box<dyn Error>>;
}

pub struct HttpWalletProvider {
    transport: HttpTransport,
}

impl HttpWalletProvider {
    pub fn new(transport: HttpTransport) -> Result<Self, Box<dyn Error>> {
        Ok(Self { transport })
    }
}

fn to_params(request: &RpcRequest) -> Result<Params, Box<dyn Error>> {
    match &request.params {
        Value::Object(map) => Ok(Params::Map(map.clone())),
        Value::Array(values) => Ok(Params::Array(values.clone())),
        Value::Null => Ok(Params::Array(Vec::new())),
        _ => Err(WalletError(format!("unsupported params for {}", request.method)).into()),
    }
}

#[async_trait]
impl WalletProvider for HttpWalletProvider {
    async fn send_async(&self, request: &RpcRequest) -> Result<Value, Box<dyn Error>> {
        let params = to_params(request)?;
        log::debug!("Sending {} to wallet", request.method);
        // The transport numbers its own requests, `request.id` is not sent.
        let response: Value = self.transport.send(&request.method, params).await?;
        Ok(response)
    }
}

#[derive(Debug, Clone)]
pub struct WalletError(pub String);

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for WalletError {}
