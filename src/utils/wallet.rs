use crate::domain::model::WalletAddress;
use rand::Rng;
use regex::Regex;
use std::sync::OnceLock;

const HEX_CHARS: &[u8] = b"0123456789abcdef";

static ETH_ADDRESS_RE: OnceLock<Regex> = OnceLock::new();

/// Shorten a wallet address for display: first 6 and last 4 characters
/// joined by an ellipsis. Addresses too short to truncate come back as-is.
pub fn format_wallet_address(address: &str) -> String {
    if address.len() < 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Shape check only (0x + 40 hex chars), not an EIP-55 checksum.
pub fn is_valid_ethereum_address(address: &str) -> bool {
    let re = ETH_ADDRESS_RE.get_or_init(|| {
        Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("address pattern is valid")
    });
    re.is_match(address)
}

/// Block explorer URL for a transaction hash; unknown chain ids fall back to
/// Ethereum mainnet.
pub fn transaction_url(tx_hash: &str, chain_id: u64) -> String {
    let base = match chain_id {
        1 => "https://etherscan.io/tx/",
        137 => "https://polygonscan.com/tx/",
        10 => "https://optimistic.etherscan.io/tx/",
        42161 => "https://arbiscan.io/tx/",
        8453 => "https://basescan.org/tx/",
        _ => "https://etherscan.io/tx/",
    };
    format!("{}{}", base, tx_hash)
}

fn random_hex(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| HEX_CHARS[rng.gen_range(0..HEX_CHARS.len())] as char)
        .collect()
}

/// Fabricated 32-byte transaction hash, standing in for an on-chain receipt.
pub fn random_tx_hash() -> String {
    format!("0x{}", random_hex(64))
}

/// Random address for fixtures only.
pub fn random_eth_address() -> WalletAddress {
    format!("0x{}", random_hex(40))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_wallet_address() {
        let address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
        assert_eq!(format_wallet_address(address), "0xf39F...2266");
    }

    #[test]
    fn test_format_wallet_address_short_input() {
        assert_eq!(format_wallet_address("0x1234"), "0x1234");
        assert_eq!(format_wallet_address(""), "");
    }

    #[test]
    fn test_is_valid_ethereum_address() {
        assert!(is_valid_ethereum_address(
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        ));
        assert!(!is_valid_ethereum_address("0x1234"));
        assert!(!is_valid_ethereum_address(
            "f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        ));
        assert!(!is_valid_ethereum_address(
            "0xZZZFd6e51aad88F6F4ce6aB8827279cffFb92266"
        ));
    }

    #[test]
    fn test_transaction_url_known_and_fallback_chains() {
        assert_eq!(
            transaction_url("0xabc", 137),
            "https://polygonscan.com/tx/0xabc"
        );
        assert_eq!(
            transaction_url("0xabc", 99999),
            "https://etherscan.io/tx/0xabc"
        );
    }

    #[test]
    fn test_random_tx_hash_shape() {
        let hash = random_tx_hash();
        assert_eq!(hash.len(), 66);
        assert!(hash.starts_with("0x"));
        assert!(hash[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_random_eth_address_is_valid() {
        assert!(is_valid_ethereum_address(&random_eth_address()));
    }
}
