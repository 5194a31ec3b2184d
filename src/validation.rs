// 🛡️ Input Validation - what the front ends check before calling the core
// The core never rejects input; an empty name just comes back as 0.

use crate::birthdate::BirthDate;
use crate::config::CalculatorConfig;
use chrono::NaiveDate;

pub const NAME_REQUIRED: &str = "please enter a name in Latin letters";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

/// Join errors into one line for status bars and API responses
pub fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// INPUT VALIDATOR
// ============================================================================

pub struct InputValidator {
    min_date: NaiveDate,
    max_date: NaiveDate,
}

impl InputValidator {
    pub fn new(config: &CalculatorConfig) -> Self {
        InputValidator {
            min_date: config.min_date,
            max_date: config.max_date,
        }
    }

    /// Trimmed name, or an error when nothing is left
    pub fn name(&self, field: &str, raw: &str) -> Result<String, ValidationError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::new(field, NAME_REQUIRED));
        }
        Ok(name.to_string())
    }

    /// `YYYY-MM-DD` inside the configured range
    pub fn birthdate(&self, field: &str, raw: &str) -> Result<BirthDate, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::new(field, "please enter a birth date (YYYY-MM-DD)"));
        }

        let date = BirthDate::parse(raw).map_err(|e| {
            ValidationError::new(field, format!("{:?} is not a valid YYYY-MM-DD date ({})", raw, e))
        })?;

        if date.date() < self.min_date || date.date() > self.max_date {
            return Err(ValidationError::new(
                field,
                format!(
                    "{} is outside the supported range {} to {}",
                    date, self.min_date, self.max_date
                ),
            ));
        }

        Ok(date)
    }

    /// Validate a name and birth date together, reporting every problem
    pub fn person(&self, raw_name: &str, raw_date: &str) -> ValidationResult<(String, BirthDate)> {
        let name = self.name("name", raw_name);
        let date = self.birthdate("birthdate", raw_date);

        match (name, date) {
            (Ok(name), Ok(date)) => Ok((name, date)),
            (name, date) => Err(name.err().into_iter().chain(date.err()).collect()),
        }
    }

    /// Validate the two birth dates of a compatibility check
    pub fn pair(&self, raw_first: &str, raw_second: &str) -> ValidationResult<(BirthDate, BirthDate)> {
        let first = self.birthdate("first", raw_first);
        let second = self.birthdate("second", raw_second);

        match (first, second) {
            (Ok(first), Ok(second)) => Ok((first, second)),
            (first, second) => Err(first.err().into_iter().chain(second.err()).collect()),
        }
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(&CalculatorConfig::default())
    }
}
