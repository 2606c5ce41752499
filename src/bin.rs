#[macro_use]
extern crate clap;
use async_jsonrpc_client::HttpTransport;
use cli_table::{print_stdout, Cell, Table};
use fry::{watch_asset_request, AssetWatcher, Erc20Token, HttpWalletProvider};
use std::error::Error;

fn show_token(token: &Erc20Token) -> Result<(), Box<dyn Error>> {
    let table = vec![
        vec!["address".cell(), token.checksum_address().cell()],
        vec!["symbol".cell(), token.symbol.clone().cell()],
        vec!["decimals".cell(), token.decimals.cell()],
        vec!["image".cell(), token.image.clone().cell()],
    ]
    .table()
    .title(vec!["field".cell(), "value".cell()]);
    print_stdout(table)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = clap_app!(
        fry =>
        (version: "0.1")
        (about: "Ask your wallet to track the FRY token.")
        (@arg NODE: -n --node +takes_value default_value("localhost:8545") "Wallet JSON-RPC endpoint" )
        (@arg show: --show "if present, prints the token descriptor and exits" )
        (@arg json: --json "if present, prints the wallet_watchAsset request and exits" )
        )
        .get_matches();

    let token = Erc20Token::fry();
    if matches.is_present("show") {
        return show_token(&token);
    }
    if matches.is_present("json") {
        let request = watch_asset_request(&token);
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let node = matches.value_of("NODE").unwrap_or("localhost:8545");
    let transport = HttpTransport::new(node);
    let wallet = HttpWalletProvider::new(transport)?;
    let watcher = AssetWatcher::with_token(&wallet, token);
    log::debug!("Asking wallet at {}", node);
    watcher.watch().await;

    Ok(())
}
