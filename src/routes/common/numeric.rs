use crate::error::HandlerError;
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Numeric columns are stored as `numeric`, the payloads carry `f64`.
/// Conversions go through the shortest decimal representation of the float so that
/// a stored value reads back as the exact float that was submitted.
pub fn to_decimal(value: f64, field: &str) -> Result<BigDecimal, HandlerError> {
    if !value.is_finite() {
        return Err(HandlerError::InvalidInput(format!(
            "{} must be a finite number",
            field
        )));
    }

    BigDecimal::from_str(&value.to_string())
        .map_err(|e| HandlerError::InvalidInput(format!("{}: {}", field, e)))
}

pub fn to_float(value: &BigDecimal, column: &'static str) -> Result<f64, HandlerError> {
    value
        .to_string()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(HandlerError::Conversion(column))
}
