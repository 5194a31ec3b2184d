// Numerology Calculator - Core Library
// Exposes the pure derivations plus the pieces the CLI, TUI and API server share

pub mod letters;        // Pythagorean letter table
pub mod reduce;         // Digit reduction with master numbers
pub mod number;         // NumerologyNumber value type
pub mod birthdate;      // BirthDate value type
pub mod derivations;    // Life path, birth day, expression, soul urge
pub mod compatibility;  // Relationship type + theme
pub mod reading;        // Per-person and per-pair reports
pub mod cache;          // Optional caller-owned memoization
pub mod config;         // Date bounds, cache size, server address
pub mod validation;     // Front-end input checks

// Re-export commonly used types
pub use letters::{value_of, is_vowel, breakdown, LetterValue, VOWELS};
pub use reduce::{reduce, digit_sum, is_master, MASTER_NUMBERS};
pub use number::NumerologyNumber;
pub use birthdate::BirthDate;
pub use derivations::{
    life_path_number, birth_day_number, expression_number, soul_urge_number,
};
pub use compatibility::{
    evaluate, theme_for, CompatibilityResult, RelationshipType, THEMES, UNKNOWN_THEME,
};
pub use reading::{Reading, CompatibilityReport};
pub use cache::{Calculator, ReadingCache, Derivation, CacheStats};
pub use config::CalculatorConfig;
pub use validation::{InputValidator, ValidationError, ValidationResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
