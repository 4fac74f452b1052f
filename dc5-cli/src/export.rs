use std::path::Path;

use anyhow::{Context, Result};

use dc5_core::models::{Combo, ScoredCombo, StageCount};

pub fn write_combos(path: &Path, combos: &[Combo]) -> Result<()> {
    let lines: Vec<String> = combos.iter().map(|c| c.to_string()).collect();
    std::fs::write(path, lines.join("\n"))
        .with_context(|| format!("Impossible d'écrire {}", path.display()))
}

/// Format du téléchargement d'origine : une ligne "combo → Score: s".
pub fn write_scores(path: &Path, scored: &[ScoredCombo]) -> Result<()> {
    let lines: Vec<String> = scored
        .iter()
        .map(|sc| format!("{} → Score: {:.2}", sc.combo, sc.score))
        .collect();
    std::fs::write(path, lines.join("\n"))
        .with_context(|| format!("Impossible d'écrire {}", path.display()))
}

pub fn write_csv(path: &Path, scored: &[ScoredCombo]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Impossible d'ouvrir {}", path.display()))?;
    writer
        .write_record(["combo", "score", "rang"])
        .context("Échec de l'écriture de l'en-tête CSV")?;
    for (i, sc) in scored.iter().enumerate() {
        writer
            .write_record([
                sc.combo.to_string(),
                format!("{:.2}", sc.score),
                (i + 1).to_string(),
            ])
            .context("Échec de l'écriture d'une ligne CSV")?;
    }
    writer.flush().context("Échec du flush CSV")?;
    Ok(())
}

/// Journal de filtrage : une ligne horodatée par étape.
pub fn write_journal(path: &Path, stages: &[StageCount]) -> Result<()> {
    let lines: Vec<String> = stages
        .iter()
        .map(|s| {
            format!(
                "{} | {} | {}",
                s.at.format("%Y-%m-%d %H:%M:%S"),
                s.stage,
                s.survivors
            )
        })
        .collect();
    std::fs::write(path, lines.join("\n"))
        .with_context(|| format!("Impossible d'écrire {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scored() -> Vec<ScoredCombo> {
        vec![
            ScoredCombo {
                combo: Combo::new([1, 1, 2, 3, 5]),
                score: 9.75,
            },
            ScoredCombo {
                combo: Combo::new([8, 8, 8, 8, 8]),
                score: 2.5,
            },
        ]
    }

    #[test]
    fn test_write_combos() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("combos.txt");
        write_combos(&path, &[Combo::new([1, 1, 2, 3, 5]), Combo::new([0, 1, 2, 3, 5])])
            .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "11235\n01235");
    }

    #[test]
    fn test_write_scores_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        write_scores(&path, &sample_scored()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "11235 → Score: 9.75\n88888 → Score: 2.50");
    }

    #[test]
    fn test_write_csv_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        write_csv(&path, &sample_scored()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "combo,score,rang");
        assert_eq!(lines[1], "11235,9.75,1");
        assert_eq!(lines[2], "88888,2.50,2");
    }

    #[test]
    fn test_write_journal_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.txt");
        let stages = vec![
            StageCount::now("espace_initial", 1024),
            StageCount::now("filtres", 42),
        ];
        write_journal(&path, &stages).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("| espace_initial | 1024"));
        assert!(lines[1].ends_with("| filtres | 42"));
    }
}
