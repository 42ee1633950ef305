use crate::utils::error::{Result, SspError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Amount must be a finite number strictly greater than zero.
pub fn validate_positive_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SspError::invalid_input(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(SspError::invalid_input(
            field_name,
            value,
            "Value must be greater than 0",
        ));
    }
    Ok(())
}

/// Term must be a whole number in `1..=u32::MAX`.
pub fn validate_term(field_name: &str, value: i64) -> Result<u32> {
    if value < 1 {
        return Err(SspError::invalid_input(
            field_name,
            value,
            "Value must be at least 1",
        ));
    }
    u32::try_from(value).map_err(|_| {
        SspError::invalid_input(field_name, value, format!("Value must be at most {}", u32::MAX))
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SspError::invalid_input(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Parses a typed-in amount. Accepts an optional leading `$` and `,` separators.
pub fn parse_amount(field_name: &str, raw: &str) -> Result<f64> {
    validate_non_empty_string(field_name, raw)?;

    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let cleaned: String = unsigned.chars().filter(|c| *c != ',').collect();

    let value = cleaned.parse::<f64>().map_err(|e| {
        SspError::invalid_input(field_name, raw, format!("Not a number: {}", e))
    })?;
    validate_positive_amount(field_name, value)?;
    Ok(value)
}

pub fn parse_term(field_name: &str, raw: &str) -> Result<u32> {
    validate_non_empty_string(field_name, raw)?;

    let value = raw.trim().parse::<i64>().map_err(|e| {
        SspError::invalid_input(field_name, raw, format!("Not a whole number: {}", e))
    })?;
    validate_term(field_name, value)
}
