// 📜 Readings - everything the front ends render for one person or a pair

use crate::birthdate::BirthDate;
use crate::cache::Calculator;
use crate::compatibility::{evaluate, CompatibilityResult};
use serde::{Deserialize, Serialize};

// ============================================================================
// PERSONAL READING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub name: String,
    pub birthdate: BirthDate,
    pub life_path: u32,
    pub birth_day: u32,
    pub expression: u32,
    pub soul_urge: u32,
}

impl Reading {
    /// Inputs are expected to be validated already (see `InputValidator::person`)
    pub fn compute(calculator: &Calculator, name: &str, birthdate: BirthDate) -> Self {
        Reading {
            name: name.to_string(),
            birthdate,
            life_path: calculator.life_path(&birthdate.to_iso_string()),
            birth_day: calculator.birth_day(birthdate.day()),
            expression: calculator.expression(name),
            soul_urge: calculator.soul_urge(name),
        }
    }

    /// (label, value) rows in display order
    pub fn rows(&self) -> Vec<(&'static str, u32)> {
        vec![
            ("Life Path Number", self.life_path),
            ("Birth Day Number", self.birth_day),
            ("Expression Number", self.expression),
            ("Soul Urge Number", self.soul_urge),
        ]
    }
}

// ============================================================================
// COMPATIBILITY REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub first_birthdate: BirthDate,
    pub second_birthdate: BirthDate,
    pub result: CompatibilityResult,
}

impl CompatibilityReport {
    pub fn compute(calculator: &Calculator, first: BirthDate, second: BirthDate) -> Self {
        let n1 = calculator.life_path(&first.to_iso_string());
        let n2 = calculator.life_path(&second.to_iso_string());

        CompatibilityReport {
            first_birthdate: first,
            second_birthdate: second,
            result: evaluate(n1, n2),
        }
    }

    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("First Life Path", self.result.first.to_string()),
            ("Second Life Path", self.result.second.to_string()),
            ("Relationship Type", self.result.relationship_label.clone()),
            ("Theme Number", self.result.total.to_string()),
            ("Theme", self.result.theme.clone()),
        ]
    }
}
