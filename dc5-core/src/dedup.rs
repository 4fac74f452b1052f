use std::collections::HashSet;

use crate::models::Combo;

/// Réduit la liste aux formes "box" uniques : la première permutation
/// rencontrée représente sa classe d'équivalence, l'ordre de découverte
/// est préservé. Idempotent.
pub fn dedup(combos: &[Combo]) -> Vec<Combo> {
    let mut seen: HashSet<[u8; 5]> = HashSet::with_capacity(combos.len());
    combos
        .iter()
        .copied()
        .filter(|c| seen.insert(c.box_form()))
        .collect()
}
