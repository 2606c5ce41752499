use super::erc_20::Erc20Token;
use super::wallet::{RpcRequest, WalletProvider};
use serde_json::{json, Value};

pub const WATCH_ASSET_METHOD: &str = "wallet_watchAsset";
pub const ASSET_TYPE: &str = "ERC20";
const REQUEST_ID: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    Added,
    NotAdded,
}

impl WatchOutcome {
    pub fn message(&self, symbol: &str) -> String {
        match self {
            WatchOutcome::Added => format!("{} token added to wallet", symbol),
            WatchOutcome::NotAdded => format!("{} token not added to wallet", symbol),
        }
    }
}

/// Builds the EIP-747 `wallet_watchAsset` envelope for `token`.
pub fn watch_asset_request(token: &Erc20Token) -> RpcRequest {
    RpcRequest {
        method: WATCH_ASSET_METHOD.to_string(),
        params: json!({
            "type": ASSET_TYPE,
            "options": token.watch_options(),
        }),
        id: REQUEST_ID,
    }
}

/// Truthiness as a browser wallet callback would see it.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub struct AssetWatcher<'a> {
    wallet: &'a dyn WalletProvider,
    token: Erc20Token,
}

impl<'a> AssetWatcher<'a> {
    pub fn new(wallet: &'a (dyn WalletProvider + 'a)) -> Self {
        Self::with_token(wallet, Erc20Token::fry())
    }

    pub fn with_token(wallet: &'a (dyn WalletProvider + 'a), token: Erc20Token) -> Self {
        Self { wallet, token }
    }

    pub fn token(&self) -> &Erc20Token {
        &self.token
    }

    /// Asks the wallet to track the token and logs what it answered.
    ///
    /// A wallet error is not propagated: only the result decides the outcome.
    pub async fn watch(&self) -> WatchOutcome {
        let request = watch_asset_request(&self.token);
        let added = match self.wallet.send_async(&request).await {
            Ok(result) => is_truthy(&result),
            Err(e) => {
                log::debug!("{} returned an error: {}", WATCH_ASSET_METHOD, e);
                false
            }
        };
        let outcome = if added {
            WatchOutcome::Added
        } else {
            WatchOutcome::NotAdded
        };
        log::info!("{}", outcome.message(&self.token.symbol));
        outcome
    }
}

pub async fn add_fry_to_wallet(wallet: &dyn WalletProvider) -> WatchOutcome {
    AssetWatcher::new(wallet).watch().await
}
