// 🔮 Core Numbers - life path, birth day, expression, soul urge
//
// Every function is total: bad input yields a degenerate 0 instead of an error.
// Callers that need to tell "empty name" apart from a real result check the raw
// input (see validation.rs), never the number.

use crate::birthdate::BirthDate;
use crate::letters::{is_vowel, value_of};
use crate::reduce::reduce;

/// Life path number from the textual form of a birth date.
/// Every ASCII digit counts; hyphens and other separators are skipped.
pub fn life_path_number(birthdate: &str) -> u32 {
    let total: u64 = birthdate
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .sum();
    reduce(total)
}

/// Birth day number from the day of the month
pub fn birth_day_number(day: u32) -> u32 {
    reduce(day as u64)
}

/// Expression number from every letter of the name
pub fn expression_number(name: &str) -> u32 {
    letter_total(name, |c| c.is_alphabetic())
}

/// Soul urge number from the vowels (A, E, I, O, U) of the name
pub fn soul_urge_number(name: &str) -> u32 {
    letter_total(name, is_vowel)
}

fn letter_total(name: &str, keep: impl Fn(char) -> bool) -> u32 {
    let total: u64 = name
        .chars()
        .filter(|&c| keep(c))
        .map(|c| value_of(c) as u64)
        .sum();
    reduce(total)
}

impl BirthDate {
    pub fn life_path_number(&self) -> u32 {
        life_path_number(&self.to_iso_string())
    }

    pub fn birth_day_number(&self) -> u32 {
        birth_day_number(self.day())
    }
}

// ============================================================================
// TESTS
// ============================================================================
