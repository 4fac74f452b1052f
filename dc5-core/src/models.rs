use chrono::{DateTime, Local};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Champ requis vide ou absent : {field}")]
    InvalidInput { field: &'static str },

    #[error("Jeton invalide : '{token}' (chiffre 0-9 attendu)")]
    MalformedDigit { token: String },
}

/// Combinaison ordonnée de 5 chiffres (forme "straight").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combo {
    pub digits: [u8; 5],
}

impl Combo {
    pub fn new(digits: [u8; 5]) -> Self {
        Self { digits }
    }

    pub fn digit_sum(&self) -> u8 {
        self.digits.iter().sum()
    }

    /// Carte de multiplicité chiffre -> occurrences.
    pub fn counts(&self) -> [u8; 10] {
        let mut counts = [0u8; 10];
        for &d in &self.digits {
            counts[d as usize] += 1;
        }
        counts
    }

    /// Forme "box" : chiffres triés, représentant canonique des permutations.
    pub fn box_form(&self) -> [u8; 5] {
        let mut sorted = self.digits;
        sorted.sort_unstable();
        sorted
    }
}

impl std::str::FromStr for Combo {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GenerateError::MalformedDigit {
            token: s.to_string(),
        };
        if s.len() != 5 {
            return Err(malformed());
        }
        let mut digits = [0u8; 5];
        for (i, c) in s.chars().enumerate() {
            digits[i] = c.to_digit(10).ok_or_else(malformed)? as u8;
        }
        Ok(Self { digits })
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCombo {
    pub combo: Combo,
    pub score: f64,
}

/// Entrée du journal de filtrage : purement observationnelle.
#[derive(Debug, Clone)]
pub struct StageCount {
    pub stage: &'static str,
    pub survivors: usize,
    pub at: DateTime<Local>,
}

impl StageCount {
    pub fn now(stage: &'static str, survivors: usize) -> Self {
        Self {
            stage,
            survivors,
            at: Local::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub stages: Vec<StageCount>,
    pub removals: Vec<(String, usize)>,
    pub deduped: Vec<Combo>,
    pub scored: Vec<ScoredCombo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_display() {
        let combo = Combo::new([0, 1, 2, 3, 5]);
        assert_eq!(combo.to_string(), "01235");
    }

    #[test]
    fn test_combo_digit_sum() {
        assert_eq!(Combo::new([1, 1, 2, 3, 5]).digit_sum(), 12);
        assert_eq!(Combo::new([0, 0, 0, 0, 0]).digit_sum(), 0);
    }

    #[test]
    fn test_combo_counts() {
        let counts = Combo::new([7, 7, 7, 2, 2]).counts();
        assert_eq!(counts[7], 3);
        assert_eq!(counts[2], 2);
        assert_eq!(counts[0], 0);
    }

    #[test]
    fn test_box_form_sorted() {
        assert_eq!(Combo::new([5, 3, 1, 2, 1]).box_form(), [1, 1, 2, 3, 5]);
    }

    #[test]
    fn test_box_form_permutation_invariant() {
        let a = Combo::new([5, 3, 1, 2, 1]);
        let b = Combo::new([1, 1, 2, 3, 5]);
        let c = Combo::new([2, 1, 5, 1, 3]);
        assert_eq!(a.box_form(), b.box_form());
        assert_eq!(a.box_form(), c.box_form());
    }

    #[test]
    fn test_combo_from_str() {
        let combo: Combo = "11235".parse().unwrap();
        assert_eq!(combo, Combo::new([1, 1, 2, 3, 5]));
        assert!("1123".parse::<Combo>().is_err());
        assert!("112355".parse::<Combo>().is_err());
        assert!("1123x".parse::<Combo>().is_err());
    }

    #[test]
    fn test_error_messages() {
        let e = GenerateError::InvalidInput { field: "graine" };
        assert!(e.to_string().contains("graine"));
        let e = GenerateError::MalformedDigit { token: "x".to_string() };
        assert!(e.to_string().contains("'x'"));
    }
}
