use serde::{Deserialize, Serialize};

use crate::pool::DigitPools;

/// Candidat en cours d'évaluation : le tuple de 5 chiffres, sa carte de
/// multiplicité et sa somme, calculés une seule fois par tuple.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub digits: [u8; 5],
    pub counts: [u8; 10],
    pub sum: u8,
}

impl Candidate {
    pub fn new(digits: [u8; 5]) -> Self {
        let mut counts = [0u8; 10];
        for &d in &digits {
            counts[d as usize] += 1;
        }
        Self {
            digits,
            counts,
            sum: digits.iter().sum(),
        }
    }

    fn max_count(&self) -> u8 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    fn vtrac_counts(&self) -> [u8; 5] {
        let mut groups = [0u8; 5];
        for &d in &self.digits {
            groups[(d % 5) as usize] += 1;
        }
        groups
    }
}

/// Interrupteurs des filtres optionnels. Tout à faux par défaut ; les
/// filtres obligatoires ne passent pas par cette structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterToggles {
    pub triples: bool,
    pub spread: bool,
    pub mirror_count: bool,
    pub high_ge8: bool,
    pub vtrac_quad: bool,
    pub uniform_vtrac: bool,
    pub primes: bool,
    pub sum_trap: bool,
    pub mirror_sum: bool,
    pub quint: bool,
    pub quad: bool,
    pub double_single: bool,
    pub double_double: bool,
    pub all_low: bool,
    pub consecutive_run: bool,
    pub mirror_pair: bool,
    pub trailing_sum: bool,
    pub two_vtrac_groups: bool,
    pub three_gt5: bool,
}

impl FilterToggles {
    /// Active le jeu de filtres optionnels historique (hors filtres
    /// structurels étendus).
    pub fn all_classic() -> Self {
        Self {
            triples: true,
            spread: true,
            mirror_count: true,
            high_ge8: true,
            vtrac_quad: true,
            uniform_vtrac: true,
            primes: true,
            sum_trap: true,
            mirror_sum: true,
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy)]
pub enum FilterKind {
    Mandatory,
    Optional(fn(&FilterToggles) -> bool),
}

/// Un filtre nommé : prédicat pur renvoyant vrai pour REJETER le candidat.
pub struct Filter {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FilterKind,
    pub rejects: fn(&Candidate, &DigitPools) -> bool,
}

impl Filter {
    pub fn is_mandatory(&self) -> bool {
        matches!(self.kind, FilterKind::Mandatory)
    }

    pub fn is_active(&self, toggles: &FilterToggles) -> bool {
        match self.kind {
            FilterKind::Mandatory => true,
            FilterKind::Optional(flag) => flag(toggles),
        }
    }
}

fn graines_min2(c: &Candidate, pools: &DigitPools) -> bool {
    c.digits.iter().filter(|&&d| pools.seed.contains(&d)).count() < 2
}

fn viviers_min2(c: &Candidate, pools: &DigitPools) -> bool {
    c.digits.iter().filter(|&&d| pools.in_pools(d)).count() < 2
}

fn quad_quinte(c: &Candidate, _: &DigitPools) -> bool {
    c.max_count() >= 4
}

fn triples(c: &Candidate, _: &DigitPools) -> bool {
    c.max_count() >= 3
}

fn ecart(c: &Candidate, _: &DigitPools) -> bool {
    let max = c.digits.iter().copied().max().unwrap_or(0);
    let min = c.digits.iter().copied().min().unwrap_or(0);
    max - min < 4
}

// Héritage : l'ensemble "miroir" couvre les dix chiffres, donc le compte
// vaut toujours 5 et le filtre ne rejette jamais. Défaut connu, conservé
// tel quel tant qu'une vraie table de miroirs n'est pas substituée.
fn miroirs_min2(c: &Candidate, _: &DigitPools) -> bool {
    const MIROIRS: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    c.digits.iter().filter(|&&d| MIROIRS.contains(&d)).count() < 2
}

fn hauts_ge8(c: &Candidate, _: &DigitPools) -> bool {
    c.digits.iter().filter(|&&d| d >= 8).count() >= 2
}

fn vtrac_quad(c: &Candidate, _: &DigitPools) -> bool {
    c.vtrac_counts().iter().copied().max().unwrap_or(0) >= 4
}

fn vtrac_uniforme(c: &Candidate, _: &DigitPools) -> bool {
    c.vtrac_counts().iter().filter(|&&g| g > 0).count() == 1
}

fn premiers(c: &Candidate, _: &DigitPools) -> bool {
    const PREMIERS: [u8; 4] = [2, 3, 5, 7];
    PREMIERS.iter().filter(|&&p| c.counts[p as usize] > 0).count() >= 3
}

fn somme_piege(c: &Candidate, _: &DigitPools) -> bool {
    matches!(c.sum % 10, 0 | 5)
}

fn somme_miroir(c: &Candidate, _: &DigitPools) -> bool {
    let mirror: i32 = c.digits.iter().map(|&d| 9 - d as i32).sum();
    i32::from(c.sum) == mirror
}

fn quinte(c: &Candidate, _: &DigitPools) -> bool {
    c.max_count() == 5
}

fn quadruple(c: &Candidate, _: &DigitPools) -> bool {
    c.max_count() == 4
}

// Une paire exactement, trois chiffres isolés : multiplicités {2,1,1,1}
fn double_simple(c: &Candidate, _: &DigitPools) -> bool {
    c.distinct() == 4 && c.max_count() == 2
}

// Deux paires et un isolé : multiplicités {2,2,1}
fn double_double(c: &Candidate, _: &DigitPools) -> bool {
    c.distinct() == 3 && c.counts.iter().filter(|&&n| n == 2).count() == 2
}

fn tout_bas(c: &Candidate, _: &DigitPools) -> bool {
    c.digits.iter().all(|&d| d <= 3)
}

fn suite3(c: &Candidate, _: &DigitPools) -> bool {
    (0..=7).any(|k| c.counts[k] > 0 && c.counts[k + 1] > 0 && c.counts[k + 2] > 0)
}

fn paire_miroir(c: &Candidate, _: &DigitPools) -> bool {
    (0..=4).any(|d| c.counts[d] > 0 && c.counts[d + 5] > 0)
}

fn somme_finale(c: &Candidate, _: &DigitPools) -> bool {
    c.digits[4] == c.sum % 10
}

fn vtrac_deux_groupes(c: &Candidate, _: &DigitPools) -> bool {
    c.vtrac_counts().iter().filter(|&&g| g > 0).count() == 2
}

fn hauts_gt5(c: &Candidate, _: &DigitPools) -> bool {
    c.digits.iter().filter(|&&d| d > 5).count() >= 3
}

/// Table des filtres, dans l'ordre fixe d'évaluation : obligatoires
/// d'abord, puis le jeu historique, puis les filtres structurels étendus.
/// L'attribution des retraits s'arrête au premier filtre qui rejette.
pub static FILTERS: &[Filter] = &[
    Filter {
        name: "graines_min2",
        description: "Moins de 2 chiffres issus de la graine",
        kind: FilterKind::Mandatory,
        rejects: graines_min2,
    },
    Filter {
        name: "viviers_min2",
        description: "Moins de 2 chiffres issus de chauds ∪ froids ∪ attendus",
        kind: FilterKind::Mandatory,
        rejects: viviers_min2,
    },
    Filter {
        name: "quad_quinte",
        description: "Un chiffre répété 4 fois ou plus",
        kind: FilterKind::Mandatory,
        rejects: quad_quinte,
    },
    Filter {
        name: "triples",
        description: "Un chiffre répété 3 fois ou plus",
        kind: FilterKind::Optional(|t| t.triples),
        rejects: triples,
    },
    Filter {
        name: "ecart",
        description: "Écart max - min inférieur à 4",
        kind: FilterKind::Optional(|t| t.spread),
        rejects: ecart,
    },
    Filter {
        name: "miroirs_min2",
        description: "Moins de 2 chiffres miroirs (héritage : sans effet)",
        kind: FilterKind::Optional(|t| t.mirror_count),
        rejects: miroirs_min2,
    },
    Filter {
        name: "hauts_ge8",
        description: "2 chiffres ou plus supérieurs ou égaux à 8",
        kind: FilterKind::Optional(|t| t.high_ge8),
        rejects: hauts_ge8,
    },
    Filter {
        name: "vtrac_quad",
        description: "4 chiffres ou plus dans un même groupe V-Trac",
        kind: FilterKind::Optional(|t| t.vtrac_quad),
        rejects: vtrac_quad,
    },
    Filter {
        name: "vtrac_uniforme",
        description: "Les 5 chiffres dans le même groupe V-Trac",
        kind: FilterKind::Optional(|t| t.uniform_vtrac),
        rejects: vtrac_uniforme,
    },
    Filter {
        name: "premiers",
        description: "3 chiffres premiers distincts ou plus (2, 3, 5, 7)",
        kind: FilterKind::Optional(|t| t.primes),
        rejects: premiers,
    },
    Filter {
        name: "somme_piege",
        description: "Somme des chiffres finissant par 0 ou 5",
        kind: FilterKind::Optional(|t| t.sum_trap),
        rejects: somme_piege,
    },
    Filter {
        name: "somme_miroir",
        description: "Somme des chiffres égale à la somme des miroirs (9 - d)",
        kind: FilterKind::Optional(|t| t.mirror_sum),
        rejects: somme_miroir,
    },
    Filter {
        name: "quinte",
        description: "5 fois le même chiffre",
        kind: FilterKind::Optional(|t| t.quint),
        rejects: quinte,
    },
    Filter {
        name: "quadruple",
        description: "Exactement 4 fois le même chiffre",
        kind: FilterKind::Optional(|t| t.quad),
        rejects: quadruple,
    },
    Filter {
        name: "double_simple",
        description: "Une paire exactement et trois chiffres isolés",
        kind: FilterKind::Optional(|t| t.double_single),
        rejects: double_simple,
    },
    Filter {
        name: "double_double",
        description: "Deux paires et un chiffre isolé",
        kind: FilterKind::Optional(|t| t.double_double),
        rejects: double_double,
    },
    Filter {
        name: "tout_bas",
        description: "Tous les chiffres inférieurs ou égaux à 3",
        kind: FilterKind::Optional(|t| t.all_low),
        rejects: tout_bas,
    },
    Filter {
        name: "suite3",
        description: "3 entiers consécutifs présents parmi les chiffres",
        kind: FilterKind::Optional(|t| t.consecutive_run),
        rejects: suite3,
    },
    Filter {
        name: "paire_miroir",
        description: "Un chiffre d ≤ 4 présent avec son miroir d + 5",
        kind: FilterKind::Optional(|t| t.mirror_pair),
        rejects: paire_miroir,
    },
    Filter {
        name: "somme_finale",
        description: "Dernier chiffre égal au dernier chiffre de la somme",
        kind: FilterKind::Optional(|t| t.trailing_sum),
        rejects: somme_finale,
    },
    Filter {
        name: "vtrac_deux_groupes",
        description: "Exactement 2 groupes V-Trac distincts",
        kind: FilterKind::Optional(|t| t.two_vtrac_groups),
        rejects: vtrac_deux_groupes,
    },
    Filter {
        name: "hauts_gt5",
        description: "3 chiffres ou plus strictement supérieurs à 5",
        kind: FilterKind::Optional(|t| t.three_gt5),
        rejects: hauts_gt5,
    },
];

/// Indice du premier filtre actif qui rejette le candidat, dans l'ordre de
/// la table. `None` signifie que le candidat survit à tous les filtres
/// actifs.
pub fn first_rejecting_idx(
    c: &Candidate,
    pools: &DigitPools,
    toggles: &FilterToggles,
) -> Option<usize> {
    FILTERS
        .iter()
        .position(|f| f.is_active(toggles) && (f.rejects)(c, pools))
}

/// Nom du premier filtre actif qui rejette le candidat.
pub fn first_rejecting(
    c: &Candidate,
    pools: &DigitPools,
    toggles: &FilterToggles,
) -> Option<&'static str> {
    first_rejecting_idx(c, pools, toggles).map(|i| FILTERS[i].name)
}
