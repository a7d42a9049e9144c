//! Numeric validation functions

/// Validates value is within the inclusive range `[min, max]`
pub fn validate_range<T: PartialOrd>(
    value: T,
    min: T,
    max: T,
    message: &str,
) -> Result<(), String> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(message.to_string())
    }
}
