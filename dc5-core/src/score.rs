use crate::models::{Combo, ScoredCombo};

// Catégories fixes du barème Trap v3. Volontairement découplées des
// catégories saisies par l'utilisateur (voir DESIGN.md).
const CHAUDS: [u8; 3] = [0, 1, 3];
const FROIDS: [u8; 3] = [2, 4, 7];
const ATTENDUS: [u8; 2] = [5, 6];
const PREMIERS: [u8; 4] = [2, 3, 5, 7];

/// Score Trap v3 : pondération par catégorie plus bonus de 1.0 par chiffre
/// premier, arrondi à 2 décimales. Borné par [2.5, 12.5].
pub fn trap_v3(combo: &Combo) -> f64 {
    let mut total: f64 = 0.0;
    for &d in &combo.digits {
        total += if CHAUDS.contains(&d) {
            1.5
        } else if FROIDS.contains(&d) {
            1.25
        } else if ATTENDUS.contains(&d) {
            1.0
        } else {
            0.5
        };
        if PREMIERS.contains(&d) {
            total += 1.0;
        }
    }
    (total * 100.0).round() / 100.0
}

/// Classe les combinaisons par score décroissant. Tri stable : à score
/// égal, l'ordre de découverte est conservé.
pub fn rank(combos: &[Combo]) -> Vec<ScoredCombo> {
    let mut scored: Vec<ScoredCombo> = combos
        .iter()
        .map(|&combo| ScoredCombo {
            combo,
            score: trap_v3(&combo),
        })
        .collect();
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored
}
