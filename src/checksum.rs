use super::wallet::WalletError;
use ethabi::Address;
use rustc_hex::ToHex;
use sha3::{Digest, Keccak256};
use std::error::Error;

/// Renders an address in EIP-55 mixed-case checksum form, `0x` prefixed.
pub fn to_checksum_address(address: &Address) -> String {
    let lower: String = address.as_bytes().to_hex();
    let hash = Keccak256::digest(lower.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }
    checksummed
}

/// Parses a hex address with or without `0x`.
///
/// All-lowercase and all-uppercase inputs are taken as is, a mixed-case input
/// must carry a valid EIP-55 checksum.
pub fn parse_address(s: &str) -> Result<Address, Box<dyn Error>> {
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if hex.len() != 40 {
        return Err(Box::new(WalletError(format!(
            "invalid address length: {}",
            s
        ))));
    }
    let address: Address = hex.parse()?;

    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && &to_checksum_address(&address)[2..] != hex {
        return Err(Box::new(WalletError(format!(
            "bad address checksum: {}",
            s
        ))));
    }
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_matches_known_vectors() {
        let address: Address = "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
        assert_eq!(
            to_checksum_address(&address),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );

        let weth: Address = "c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".parse().unwrap();
        assert_eq!(
            to_checksum_address(&weth),
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        );
    }

    #[test]
    fn parse_accepts_prefix_and_plain_case() {
        let a = parse_address("0x633a3d2091dc7982597a0f635d23ba5eb1223f48").unwrap();
        let b = parse_address("633A3D2091DC7982597A0F635D23BA5EB1223F48").unwrap();
        let c = parse_address("0x633A3d2091dc7982597A0f635d23Ba5EB1223f48").unwrap();
        let d = parse_address("0X633A3D2091DC7982597A0F635D23BA5EB1223F48").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a, d);
        assert_eq!(
            to_checksum_address(&a),
            "0x633A3d2091dc7982597A0f635d23Ba5EB1223f48"
        );
    }

    #[test]
    fn parse_rejects_bad_checksum() {
        assert!(parse_address("0x633a3d2091dc7982597A0f635d23Ba5EB1223f48").is_err());
    }

    #[test]
    fn parse_rejects_bad_length() {
        assert!(parse_address("0x633a3d").is_err());
        assert!(parse_address("").is_err());
    }
}
