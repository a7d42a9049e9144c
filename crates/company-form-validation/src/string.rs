//! String validation functions

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Fails with `message` when the value has more than `max` characters
pub fn validate_max_length(s: &str, max: usize, message: &str) -> Result<(), String> {
    if char_len(s) <= max {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_length() {
        assert!(validate_max_length("hello", 5, "too long").is_ok());
        assert!(validate_max_length("", 5, "too long").is_ok());
        assert_eq!(
            validate_max_length("hello!", 5, "too long"),
            Err("too long".to_string())
        );
    }

    #[test]
    fn test_max_length_counts_chars() {
        // 5 chars, 10 bytes
        let s = "ééééé";
        assert_eq!(s.len(), 10);
        assert!(validate_max_length(s, 5, "too long").is_ok());
    }
}
