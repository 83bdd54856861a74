//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an already-read variable value, falling back to `default`.
///
/// An unset variable is the expected case and stays silent; a value that
/// fails to parse is logged at warn level before the default is used.
pub fn parse_or_default<T>(var: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
            default
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_value() {
        let size: u32 = parse_or_default("POOL", Some("4".to_owned()), 8);
        assert_eq!(size, 4);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let size: u32 = parse_or_default("POOL", Some(" 12 ".to_owned()), 8);
        assert_eq!(size, 12);
    }

    #[test]
    fn garbage_falls_back_to_default() {
        let size: u32 = parse_or_default("POOL", Some("lots".to_owned()), 8);
        assert_eq!(size, 8);
    }

    #[test]
    fn unset_falls_back_to_default() {
        let size: u32 = parse_or_default("POOL", None, 8);
        assert_eq!(size, 8);
    }
}
