use std::collections::BTreeSet;

use crate::models::GenerateError;

/// Les quatre catégories de chiffres fournies par l'utilisateur.
///
/// `seed_raw` conserve la liste brute (ordre et doublons) telle que saisie ;
/// `seed` en est l'ensemble dédupliqué. La somme de graine est calculée sur
/// l'ensemble (convention documentée dans DESIGN.md).
#[derive(Debug, Clone)]
pub struct DigitPools {
    pub hot: BTreeSet<u8>,
    pub cold: BTreeSet<u8>,
    pub due: BTreeSet<u8>,
    pub seed: BTreeSet<u8>,
    pub seed_raw: Vec<u8>,
}

impl DigitPools {
    pub fn parse(hot: &str, cold: &str, due: &str, seed: &str) -> Result<Self, GenerateError> {
        // Les quatre champs doivent être présents avant tout parsing
        for (field, value) in [
            ("chauds", hot),
            ("froids", cold),
            ("attendus", due),
            ("graine", seed),
        ] {
            if value.trim().is_empty() {
                return Err(GenerateError::InvalidInput { field });
            }
        }

        let seed_raw = parse_digit_list(seed)?;
        Ok(Self {
            hot: parse_digit_list(hot)?.into_iter().collect(),
            cold: parse_digit_list(cold)?.into_iter().collect(),
            due: parse_digit_list(due)?.into_iter().collect(),
            seed: seed_raw.iter().copied().collect(),
            seed_raw,
        })
    }

    /// Univers d'énumération : union triée et dédupliquée des quatre
    /// catégories. L'ordre trié rend l'énumération déterministe.
    pub fn alphabet(&self) -> Vec<u8> {
        let mut all = BTreeSet::new();
        all.extend(&self.hot);
        all.extend(&self.cold);
        all.extend(&self.due);
        all.extend(&self.seed);
        all.into_iter().collect()
    }

    /// Somme des chiffres de graine, calculée sur l'ensemble dédupliqué.
    pub fn seed_sum(&self) -> u8 {
        self.seed.iter().sum()
    }

    /// Appartenance au vivier chauds ∪ froids ∪ attendus.
    pub fn in_pools(&self, d: u8) -> bool {
        self.hot.contains(&d) || self.cold.contains(&d) || self.due.contains(&d)
    }
}

fn parse_digit_list(s: &str) -> Result<Vec<u8>, GenerateError> {
    s.split(',')
        .map(|token| {
            let token = token.trim();
            match token.parse::<u8>() {
                Ok(d) if d <= 9 => Ok(d),
                _ => Err(GenerateError::MalformedDigit {
                    token: token.to_string(),
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok() {
        let pools = DigitPools::parse("1,3", "2", "5", "1,5").unwrap();
        assert_eq!(pools.hot, BTreeSet::from([1, 3]));
        assert_eq!(pools.cold, BTreeSet::from([2]));
        assert_eq!(pools.due, BTreeSet::from([5]));
        assert_eq!(pools.seed, BTreeSet::from([1, 5]));
    }

    #[test]
    fn test_parse_trims_tokens() {
        let pools = DigitPools::parse(" 1 , 3 ", "2", "5", "1").unwrap();
        assert_eq!(pools.hot, BTreeSet::from([1, 3]));
    }

    #[test]
    fn test_empty_field_rejected() {
        for i in 0..4 {
            let mut fields = ["1", "2", "3", "4"];
            fields[i] = "";
            let err = DigitPools::parse(fields[0], fields[1], fields[2], fields[3]).unwrap_err();
            assert!(matches!(err, GenerateError::InvalidInput { .. }), "champ {}", i);
        }
    }

    #[test]
    fn test_malformed_token_named() {
        let err = DigitPools::parse("1,x", "2", "3", "4").unwrap_err();
        assert_eq!(
            err,
            GenerateError::MalformedDigit {
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn test_two_digit_token_rejected() {
        let err = DigitPools::parse("12", "2", "3", "4").unwrap_err();
        assert!(matches!(err, GenerateError::MalformedDigit { .. }));
    }

    #[test]
    fn test_trailing_comma_rejected() {
        let err = DigitPools::parse("1,2,", "2", "3", "4").unwrap_err();
        assert_eq!(
            err,
            GenerateError::MalformedDigit {
                token: String::new()
            }
        );
    }

    #[test]
    fn test_alphabet_sorted_deduped() {
        let pools = DigitPools::parse("5,1", "1,9", "0", "5,3").unwrap();
        assert_eq!(pools.alphabet(), vec![0, 1, 3, 5, 9]);
    }

    #[test]
    fn test_seed_raw_keeps_duplicates() {
        let pools = DigitPools::parse("1", "2", "3", "2,2,5").unwrap();
        assert_eq!(pools.seed_raw, vec![2, 2, 5]);
        assert_eq!(pools.seed, BTreeSet::from([2, 5]));
    }

    #[test]
    fn test_seed_sum_set_convention() {
        // "2,2,2" : ensemble {2} -> somme 2, pas 6
        let pools = DigitPools::parse("1", "2", "3", "2,2,2").unwrap();
        assert_eq!(pools.seed_sum(), 2);
    }

    #[test]
    fn test_in_pools() {
        let pools = DigitPools::parse("1", "2", "3", "9").unwrap();
        assert!(pools.in_pools(1));
        assert!(pools.in_pools(2));
        assert!(pools.in_pools(3));
        assert!(!pools.in_pools(9));
    }
}
