// 🔤 Letter Values - Pythagorean letter table
// Each Latin letter carries a digit 1-9, assigned cyclically by alphabet position

use serde::{Deserialize, Serialize};

// ============================================================================
// LETTER TABLE
// ============================================================================

/// Vowels that feed the soul urge number
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Digit value of a letter (case-insensitive).
///
/// A,J,S=1  B,K,T=2  C,L,U=3  D,M,V=4  E,N,W=5  F,O,X=6  G,P,Y=7  H,Q,Z=8  I,R=9
///
/// Anything outside A-Z (digits, punctuation, whitespace, accented or
/// non-Latin letters) is worth 0.
pub fn value_of(c: char) -> u32 {
    match c.to_ascii_uppercase() {
        'A' | 'J' | 'S' => 1,
        'B' | 'K' | 'T' => 2,
        'C' | 'L' | 'U' => 3,
        'D' | 'M' | 'V' => 4,
        'E' | 'N' | 'W' => 5,
        'F' | 'O' | 'X' => 6,
        'G' | 'P' | 'Y' => 7,
        'H' | 'Q' | 'Z' => 8,
        'I' | 'R' => 9,
        _ => 0,
    }
}

/// True when the uppercase form of `c` is A, E, I, O or U
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_uppercase())
}

// ============================================================================
// LETTER BREAKDOWN
// ============================================================================

/// One alphabetic character of a name with its table value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterValue {
    pub letter: char,
    pub value: u32,
    pub vowel: bool,
}

/// Per-letter view of a name, used by the front ends to show their work.
/// Non-alphabetic characters are skipped; unmapped letters show value 0.
pub fn breakdown(name: &str) -> Vec<LetterValue> {
    name.chars()
        .filter(|c| c.is_alphabetic())
        .map(|c| LetterValue {
            letter: c,
            value: value_of(c),
            vowel: is_vowel(c),
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
