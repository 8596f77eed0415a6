use crate::utils::error::{MarketError, Result};
use chrono::{DateTime, Utc};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if value < 0.0 || !value.is_finite() {
        return Err(MarketError::InvalidFieldValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(MarketError::InvalidFieldValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(MarketError::InvalidFieldValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_date_order(
    field_name: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<()> {
    if start >= end {
        return Err(MarketError::InvalidFieldValue {
            field: field_name.to_string(),
            value: format!("{} .. {}", start, end),
            reason: "Start date must be strictly before end date".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MarketError::InvalidFieldValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("price_per_night", 0.0).is_ok());
        assert!(validate_non_negative("price_per_night", 250.0).is_ok());
        assert!(validate_non_negative("price_per_night", -1.0).is_err());
        assert!(validate_non_negative("price_per_night", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("rating", 1u8, 1, 5).is_ok());
        assert!(validate_range("rating", 5u8, 1, 5).is_ok());
        assert!(validate_range("rating", 0u8, 1, 5).is_err());
        assert!(validate_range("rating", 6u8, 1, 5).is_err());
    }

    #[test]
    fn test_validate_date_order() {
        let check_in = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let check_out = Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap();
        assert!(validate_date_order("check_in", check_in, check_out).is_ok());
        assert!(validate_date_order("check_in", check_out, check_in).is_err());
        assert!(validate_date_order("check_in", check_in, check_in).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("guests", 2, 1).is_ok());
        assert!(validate_positive_number("guests", 0, 1).is_err());
    }
}
