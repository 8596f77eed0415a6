use clap::Parser;

use crate::utils::error::{MarketError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use crate::utils::wallet::is_valid_ethereum_address;

#[derive(Debug, Clone, Parser)]
#[command(name = "blockstay")]
#[command(about = "Demo driver for the blockstay reservation workflow")]
pub struct CliConfig {
    #[arg(long, default_value = "1", help = "Listing to reserve")]
    pub listing_id: String,

    #[arg(
        long,
        default_value = "0x71bE63f3384f5fb98995898A86B02Fb2426c5788",
        help = "Guest wallet address"
    )]
    pub guest: String,

    #[arg(long, default_value = "3")]
    pub nights: u32,

    #[arg(long, default_value = "2")]
    pub guests: u32,

    #[arg(long, help = "Skip the simulated network delays")]
    pub no_delay: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if !is_valid_ethereum_address(&self.guest) {
            return Err(MarketError::InvalidFieldValue {
                field: "guest".to_string(),
                value: self.guest.clone(),
                reason: "Not a 0x-prefixed 40-hex-char wallet address".to_string(),
            });
        }
        validate_positive_number("nights", self.nights, 1)?;
        validate_positive_number("guests", self.guests, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            listing_id: "1".to_string(),
            guest: "0x71bE63f3384f5fb98995898A86B02Fb2426c5788".to_string(),
            nights: 3,
            guests: 2,
            no_delay: true,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_wallet() {
        let mut config = base_config();
        config.guest = "not-a-wallet".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_nights() {
        let mut config = base_config();
        config.nights = 0;
        assert!(config.validate().is_err());
    }
}
