use crate::utils::error::{HumanizeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Inclusive bounds for the `max_units` argument accepted by the formatter.
pub const MIN_UNITS: usize = 1;
pub const MAX_UNITS: usize = 6;

pub fn validate_max_units(value: usize) -> Result<()> {
    if value < MIN_UNITS || value > MAX_UNITS {
        return Err(HumanizeError::InvalidArgument { value });
    }
    Ok(())
}

pub fn validate_word_forms(
    locale: &str,
    unit: &str,
    forms: &[String],
    required: usize,
) -> Result<()> {
    if forms.len() < required {
        return Err(HumanizeError::Table {
            message: format!(
                "locale {:?} needs at least {} word forms for {}, found {}",
                locale,
                required,
                unit,
                forms.len()
            ),
        });
    }

    if forms.iter().any(|form| form.trim().is_empty()) {
        return Err(HumanizeError::Table {
            message: format!("locale {:?} has an empty word form for {}", locale, unit),
        });
    }

    Ok(())
}

pub fn validate_locale_code(code: &str) -> Result<()> {
    if code.trim().is_empty() {
        return Err(HumanizeError::Table {
            message: "locale code cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_max_units() {
        assert!(validate_max_units(1).is_ok());
        assert!(validate_max_units(3).is_ok());
        assert!(validate_max_units(6).is_ok());
        assert!(validate_max_units(0).is_err());
        assert!(validate_max_units(7).is_err());
    }

    #[test]
    fn test_validate_word_forms() {
        let forms = vec!["year".to_string(), "years".to_string()];
        assert!(validate_word_forms("en", "years", &forms, 2).is_ok());
        assert!(validate_word_forms("ru", "years", &forms, 3).is_err());

        let blank = vec!["year".to_string(), "  ".to_string()];
        assert!(validate_word_forms("en", "years", &blank, 2).is_err());
    }

    #[test]
    fn test_validate_locale_code() {
        assert!(validate_locale_code("en").is_ok());
        assert!(validate_locale_code("").is_err());
        assert!(validate_locale_code("   ").is_err());
    }
}
