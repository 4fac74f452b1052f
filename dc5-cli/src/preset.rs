use std::path::Path;

use anyhow::{Context, Result};

use dc5_core::filters::FilterToggles;

pub fn save(path: &Path, toggles: &FilterToggles) -> Result<()> {
    let json = serde_json::to_string_pretty(toggles)
        .context("Échec de la sérialisation du préréglage")?;
    std::fs::write(path, json)
        .with_context(|| format!("Impossible d'écrire le préréglage {}", path.display()))
}

pub fn load(path: &Path) -> Result<FilterToggles> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire le préréglage {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Préréglage invalide : {}", path.display()))
}
