mod checksum;
mod erc_20;
mod wallet;
mod watch_asset;

pub use checksum::{parse_address, to_checksum_address};
pub use erc_20::Erc20Token;
pub use wallet::{HttpWalletProvider, RpcRequest, WalletError, WalletProvider};
pub use watch_asset::{
    add_fry_to_wallet, watch_asset_request, AssetWatcher, WatchOutcome, ASSET_TYPE,
    WATCH_ASSET_METHOD,
};
