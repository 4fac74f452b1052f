use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use dc5_core::filters::FILTERS;
use dc5_core::models::{Combo, ScoredCombo, StageCount};

pub fn display_stages(stages: &[StageCount]) {
    println!("\n📋 Étapes du pipeline\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Étape", "Survivants", "Horodatage"]);

    for stage in stages {
        table.add_row(vec![
            stage.stage.to_string(),
            stage.survivors.to_string(),
            stage.at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }
    println!("{table}");
}

pub fn display_removals(removals: &[(String, usize)]) {
    println!("\n🗑 Retraits par motif\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Motif", "Retraits"]);

    for (name, count) in removals {
        table.add_row(vec![name.clone(), count.to_string()]);
    }
    println!("{table}");
}

pub fn display_combos(combos: &[Combo], limit: usize) {
    println!("\n🎯 {} combinaisons uniques (forme box)\n", combos.len());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Combinaison", "Somme"]);

    for (i, combo) in combos.iter().take(limit).enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            combo.to_string(),
            combo.digit_sum().to_string(),
        ]);
    }
    println!("{table}");

    if combos.len() > limit {
        println!("... {} autres non affichées (--limite)", combos.len() - limit);
    }
}

pub fn display_scored(scored: &[ScoredCombo], limit: usize) {
    println!("\n🏆 Classement Trap v3\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Rang", "Combinaison", "Score"]);

    for (i, sc) in scored.iter().take(limit).enumerate() {
        table.add_row(vec![
            Cell::new(format!("{}", i + 1)),
            Cell::new(sc.combo.to_string()),
            Cell::new(format!("{:.2}", sc.score)),
        ]);
    }
    println!("{table}");

    if scored.len() > limit {
        println!("... {} autres non affichées (--limite)", scored.len() - limit);
    }
}

pub fn display_filters() {
    println!("\n🔎 Filtres disponibles\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Filtre", "Type", "Description"]);

    for filter in FILTERS {
        let (kind, color) = if filter.is_mandatory() {
            ("Obligatoire", Color::Red)
        } else {
            ("Optionnel", Color::Green)
        };
        table.add_row(vec![
            Cell::new(filter.name),
            Cell::new(kind).fg(color),
            Cell::new(filter.description),
        ]);
    }
    println!("{table}");
}
