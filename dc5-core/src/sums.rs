use std::collections::BTreeSet;

/// Les dix sommes de chiffres historiquement les plus fréquentes.
pub const TOP_SUMS: [u8; 10] = [13, 14, 17, 19, 21, 23, 24, 26, 28, 30];

/// Table historique graine -> sommes gagnantes plausibles.
/// Une somme de graine hors de 11..=36 ne correspond à aucune somme valide :
/// la génération produit alors zéro candidat, ce n'est pas une erreur.
pub fn seed_indexed_sums(seed_sum: u8) -> &'static [u8] {
    match seed_sum {
        11 => &[14, 15],
        12 => &[15, 16],
        13 => &[16, 17],
        14 => &[16, 17, 18],
        15 => &[14, 15, 16, 17],
        16 => &[15, 16, 17],
        17 => &[16, 17, 18],
        18 => &[16, 17, 19],
        19 => &[17, 19, 20],
        20 => &[18, 20, 21],
        21 => &[19, 20, 21, 22],
        22 => &[20, 21, 22, 23],
        23 => &[21, 22, 23, 24],
        24 => &[22, 23, 24, 25],
        25 => &[23, 24, 25],
        26 => &[24, 25, 26, 27],
        27 => &[25, 26, 27, 28],
        28 => &[26, 27, 28],
        29 => &[27, 28, 29, 30],
        30 => &[28, 29, 30, 31],
        31 => &[29, 30, 31, 32],
        32 => &[30, 31, 32, 33],
        33 => &[31, 32, 33, 34],
        34 => &[32, 33, 34],
        35 => &[33, 34, 35],
        36 => &[34, 35, 36],
        _ => &[],
    }
}

/// Politique de sommes valides. Chaque couche active est un ET logique :
/// une somme candidate doit appartenir à toutes les couches actives.
#[derive(Debug, Clone, Default)]
pub struct SumPolicy {
    pub seed_indexed: bool,
    pub fixed_top_sums: bool,
    pub manual_allowlist: Option<BTreeSet<u8>>,
}

impl SumPolicy {
    pub fn is_active(&self) -> bool {
        self.seed_indexed || self.fixed_top_sums || self.manual_allowlist.is_some()
    }

    pub fn accepts(&self, digit_sum: u8, seed_sum: u8) -> bool {
        if self.seed_indexed && !seed_indexed_sums(seed_sum).contains(&digit_sum) {
            return false;
        }
        if self.fixed_top_sums && !TOP_SUMS.contains(&digit_sum) {
            return false;
        }
        if let Some(allowed) = &self.manual_allowlist {
            if !allowed.contains(&digit_sum) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        assert_eq!(seed_indexed_sums(11), &[14, 15]);
        assert_eq!(seed_indexed_sums(15), &[14, 15, 16, 17]);
        assert_eq!(seed_indexed_sums(36), &[34, 35, 36]);
    }

    #[test]
    fn test_table_out_of_range_empty() {
        assert!(seed_indexed_sums(0).is_empty());
        assert!(seed_indexed_sums(10).is_empty());
        assert!(seed_indexed_sums(37).is_empty());
    }

    #[test]
    fn test_inactive_policy_accepts_all() {
        let policy = SumPolicy::default();
        assert!(!policy.is_active());
        for sum in 0..=45 {
            assert!(policy.accepts(sum, 0));
        }
    }

    #[test]
    fn test_top_sums_policy() {
        let policy = SumPolicy {
            fixed_top_sums: true,
            ..Default::default()
        };
        assert!(policy.accepts(13, 0));
        assert!(policy.accepts(30, 0));
        assert!(!policy.accepts(15, 0));
    }

    #[test]
    fn test_seed_indexed_policy() {
        let policy = SumPolicy {
            seed_indexed: true,
            ..Default::default()
        };
        assert!(policy.accepts(14, 11));
        assert!(!policy.accepts(16, 11));
        // graine hors table : aucune somme acceptée
        assert!(!policy.accepts(14, 5));
    }

    #[test]
    fn test_layers_are_anded() {
        let policy = SumPolicy {
            seed_indexed: true,
            fixed_top_sums: true,
            ..Default::default()
        };
        // 17 est dans la table pour graine 13 ET dans TOP_SUMS
        assert!(policy.accepts(17, 13));
        // 16 est dans la table pour graine 13 mais pas dans TOP_SUMS
        assert!(!policy.accepts(16, 13));
    }

    #[test]
    fn test_manual_allowlist() {
        let policy = SumPolicy {
            manual_allowlist: Some(BTreeSet::from([12, 22])),
            ..Default::default()
        };
        assert!(policy.accepts(12, 0));
        assert!(!policy.accepts(13, 0));
    }
}
