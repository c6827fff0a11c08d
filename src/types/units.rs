//! Wei / ether unit conversion.

use alloy::primitives::U256;
use rust_decimal::Decimal;

use crate::{
    error::{AppError, Result},
    ethereum::constants::ETH_DECIMALS,
};

/// Format a U256 value with decimals to a human-readable string.
pub fn format_units(value: U256, decimals: u8) -> String {
    if value == U256::ZERO {
        return "0".to_string();
    }

    let value_str = value.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return value_str;
    }

    let len = value_str.len();
    if len <= decimals {
        // Value is less than 1, pad with zeros
        let zeros = decimals - len;
        let decimal_part = value_str.trim_end_matches('0');
        format!("0.{}{}", "0".repeat(zeros), decimal_part)
    } else {
        let (integer, decimal) = value_str.split_at(len - decimals);
        let decimal = decimal.trim_end_matches('0');
        if decimal.is_empty() {
            integer.to_string()
        } else {
            format!("{}.{}", integer, decimal)
        }
    }
}

/// Parse a human-readable amount string to U256 with decimals.
///
/// Fraction digits beyond `decimals` are truncated.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256> {
    let amount = amount.trim();

    if amount.is_empty() {
        return Err(AppError::Parse("Amount cannot be empty".to_string()));
    }
    if amount.starts_with('-') {
        return Err(AppError::Parse("Amount cannot be negative".to_string()));
    }

    let decimals = decimals as usize;
    let multiplier = U256::from(10).pow(U256::from(decimals));

    let (integer, fraction) = match amount.split_once('.') {
        Some((integer, fraction)) if !fraction.contains('.') => (integer, fraction),
        Some(_) => return Err(AppError::Parse(format!("Invalid amount format: {}", amount))),
        None => (amount, ""),
    };

    // Plain decimal digits only: U256's parser would also take "0x"/"0b" prefixes
    if !integer.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(AppError::Parse(format!("Invalid amount format: {}", amount)));
    }

    let mut fraction = fraction.to_string();
    if fraction.len() > decimals {
        fraction.truncate(decimals);
    } else {
        fraction.push_str(&"0".repeat(decimals - fraction.len()));
    }

    let integer_value = if integer.is_empty() {
        U256::ZERO
    } else {
        integer
            .parse::<U256>()
            .map_err(|e| AppError::Parse(format!("Invalid integer part '{}': {}", integer, e)))?
    };
    let fraction_value = if fraction.is_empty() {
        U256::ZERO
    } else {
        fraction
            .parse::<U256>()
            .map_err(|e| AppError::Parse(format!("Invalid fraction part '{}': {}", fraction, e)))?
    };

    integer_value
        .checked_mul(multiplier)
        .and_then(|v| v.checked_add(fraction_value))
        .ok_or_else(|| AppError::NumericOverflow(format!("{} does not fit in 256 bits", amount)))
}

/// Convert a wei amount to ether.
///
/// Fails when the value does not fit in a [`Decimal`].
pub fn wei_to_eth(wei: U256) -> Result<Decimal> {
    let formatted = format_units(wei, ETH_DECIMALS);
    formatted
        .parse::<Decimal>()
        .map_err(|e| AppError::NumericOverflow(format!("{} wei as ether: {}", wei, e)))
}

/// Convert an ether amount to wei.
///
/// Precision below one wei is truncated. Negative amounts are rejected.
pub fn eth_to_wei(eth: Decimal) -> Result<U256> {
    if eth.is_sign_negative() && !eth.is_zero() {
        return Err(AppError::Parse(format!("Ether amount cannot be negative: {}", eth)));
    }
    parse_units(&eth.normalize().to_string(), ETH_DECIMALS)
}
