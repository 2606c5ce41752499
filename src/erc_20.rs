use super::checksum::{parse_address, to_checksum_address};
use ethabi::Address;
use serde_json::{json, Value};
use std::error::Error;

const FRY_ADDRESS: [u8; 20] = [
    0x63, 0x3a, 0x3d, 0x20, 0x91, 0xdc, 0x79, 0x82, 0x59, 0x7a, 0x0f, 0x63, 0x5d, 0x23, 0xba, 0x5e,
    0xb1, 0x22, 0x3f, 0x48,
];
const FRY_SYMBOL: &str = "FRY";
const FRY_DECIMALS: u8 = 18;
const FRY_IMAGE: &str = "https://foundrydao.com/common-assets/img/fry-icon.png";

#[derive(Debug, Clone, PartialEq)]
pub struct Erc20Token {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
    pub image: String,
}

impl Erc20Token {
    pub fn new(
        address: &str,
        symbol: &str,
        decimals: u8,
        image: &str,
    ) -> Result<Self, Box<dyn Error>> {
        let address = parse_address(address)?;
        Ok(Self {
            address,
            symbol: symbol.to_string(),
            decimals,
            image: image.to_string(),
        })
    }

    /// The FoundryDAO FRY token.
    pub fn fry() -> Self {
        Self {
            address: Address::from(FRY_ADDRESS),
            symbol: FRY_SYMBOL.to_string(),
            decimals: FRY_DECIMALS,
            image: FRY_IMAGE.to_string(),
        }
    }

    pub fn checksum_address(&self) -> String {
        to_checksum_address(&self.address)
    }

    /// The `options` object of a `wallet_watchAsset` request.
    pub fn watch_options(&self) -> Value {
        json!({
            "address": self.checksum_address(),
            "symbol": self.symbol,
            "decimals": self.decimals,
            "image": self.image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fry_descriptor_is_fixed() {
        let fry = Erc20Token::fry();
        assert_eq!(
            fry.checksum_address(),
            "0x633A3d2091dc7982597A0f635d23Ba5EB1223f48"
        );
        assert_eq!(fry.symbol, "FRY");
        assert_eq!(fry.decimals, 18);
        assert_eq!(fry.image, FRY_IMAGE);
        assert_eq!(fry, Erc20Token::fry());
    }

    #[test]
    fn watch_options_match_literal() {
        let expected = json!({
            "address": "0x633A3d2091dc7982597A0f635d23Ba5EB1223f48",
            "symbol": "FRY",
            "decimals": 18,
            "image": "https://foundrydao.com/common-assets/img/fry-icon.png",
        });
        assert_eq!(Erc20Token::fry().watch_options(), expected);
    }

    #[test]
    fn new_parses_and_checks_address() {
        let token = Erc20Token::new(
            "c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
            "WETH",
            18,
            "https://example.org/weth.png",
        )
        .unwrap();
        assert_eq!(
            token.checksum_address(),
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        );
        assert_eq!(token.watch_options()["symbol"], "WETH");

        let bad = Erc20Token::new("0xC02aaa39b223FE8D0A0e5C4F27eAD9083C756Cc2", "WETH", 18, "");
        assert!(bad.is_err());
    }
}
