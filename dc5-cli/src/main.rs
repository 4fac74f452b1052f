mod display;
mod export;
mod preset;

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use dc5_core::filters::FilterToggles;
use dc5_core::models::Combo;
use dc5_core::pipeline::{run, GenerateConfig};
use dc5_core::score::rank;
use dc5_core::sums::SumPolicy;

use crate::display::{
    display_combos, display_filters, display_removals, display_scored, display_stages,
};

#[derive(Parser)]
#[command(name = "dc5", about = "Générateur guidé de combinaisons DC-5 par règles de filtrage")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Générer, filtrer et classer les combinaisons
    Generer(GenererArgs),

    /// Lister les filtres disponibles
    Filtres,

    /// Calculer le score Trap v3 de combinaisons données
    Scorer {
        /// Combinaisons de 5 chiffres (ex: 11235)
        combos: Vec<String>,
    },
}

#[derive(Args)]
struct GenererArgs {
    /// Chiffres chauds (séparés par des virgules)
    #[arg(long)]
    chauds: String,

    /// Chiffres froids (séparés par des virgules)
    #[arg(long)]
    froids: String,

    /// Chiffres attendus (séparés par des virgules)
    #[arg(long)]
    attendus: String,

    /// Chiffres de la graine, issus du dernier tirage
    #[arg(long)]
    graine: String,

    /// Politique de sommes indexée sur la somme de graine
    #[arg(long)]
    somme_graine: bool,

    /// Politique des dix sommes historiques les plus fréquentes
    #[arg(long)]
    sommes_top: bool,

    /// Liste manuelle de sommes autorisées (ex: 13,17,21)
    #[arg(long)]
    sommes: Option<String>,

    /// Activer tout le jeu de filtres optionnels historique
    #[arg(long)]
    tous_filtres: bool,

    /// Éliminer les triples (3 fois le même chiffre)
    #[arg(long)]
    triples: bool,

    /// Écart max - min inférieur à 4
    #[arg(long)]
    ecart: bool,

    /// Moins de 2 chiffres miroirs (héritage : sans effet)
    #[arg(long)]
    miroirs: bool,

    /// 2 chiffres ou plus supérieurs ou égaux à 8
    #[arg(long)]
    hauts_ge8: bool,

    /// 4 chiffres ou plus dans un même groupe V-Trac
    #[arg(long)]
    vtrac_quad: bool,

    /// Les 5 chiffres dans le même groupe V-Trac
    #[arg(long)]
    vtrac_uniforme: bool,

    /// 3 chiffres premiers distincts ou plus
    #[arg(long)]
    premiers: bool,

    /// Somme finissant par 0 ou 5
    #[arg(long)]
    somme_piege: bool,

    /// Somme égale à la somme des miroirs
    #[arg(long)]
    somme_miroir: bool,

    /// 5 fois le même chiffre
    #[arg(long)]
    quinte: bool,

    /// Exactement 4 fois le même chiffre
    #[arg(long)]
    quadruple: bool,

    /// Une paire exactement et trois chiffres isolés
    #[arg(long)]
    double_simple: bool,

    /// Deux paires et un chiffre isolé
    #[arg(long)]
    double_double: bool,

    /// Tous les chiffres inférieurs ou égaux à 3
    #[arg(long)]
    tout_bas: bool,

    /// 3 entiers consécutifs présents parmi les chiffres
    #[arg(long)]
    suite3: bool,

    /// Un chiffre d ≤ 4 présent avec son miroir d + 5
    #[arg(long)]
    paire_miroir: bool,

    /// Dernier chiffre égal au dernier chiffre de la somme
    #[arg(long)]
    somme_finale: bool,

    /// Exactement 2 groupes V-Trac distincts
    #[arg(long)]
    vtrac_deux_groupes: bool,

    /// 3 chiffres ou plus strictement supérieurs à 5
    #[arg(long)]
    hauts_gt5: bool,

    /// Charger un préréglage de filtres (JSON)
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Sauver le préréglage de filtres courant (JSON)
    #[arg(long)]
    sauver_preset: Option<PathBuf>,

    /// Afficher le classement Trap v3
    #[arg(long)]
    scorer: bool,

    /// Nombre maximal de combinaisons affichées
    #[arg(long, default_value = "50")]
    limite: usize,

    /// Exporter la liste des combinaisons (texte)
    #[arg(long)]
    export: Option<PathBuf>,

    /// Exporter les combinaisons scorées (texte)
    #[arg(long)]
    export_scores: Option<PathBuf>,

    /// Exporter le classement en CSV (combo, score, rang)
    #[arg(long)]
    export_csv: Option<PathBuf>,

    /// Écrire le journal horodaté des étapes de filtrage
    #[arg(long)]
    journal: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generer(args) => cmd_generer(&args),
        Command::Filtres => {
            display_filters();
            Ok(())
        }
        Command::Scorer { combos } => cmd_scorer(&combos),
    }
}

fn cmd_generer(args: &GenererArgs) -> Result<()> {
    let toggles = build_toggles(args)?;

    if let Some(path) = &args.sauver_preset {
        preset::save(path, &toggles)?;
        println!("Préréglage sauvé dans {}", path.display());
    }

    let config = GenerateConfig {
        toggles,
        sum_policy: SumPolicy {
            seed_indexed: args.somme_graine,
            fixed_top_sums: args.sommes_top,
            manual_allowlist: args.sommes.as_deref().map(parse_sum_list).transpose()?,
        },
    };

    let report = run(&args.chauds, &args.froids, &args.attendus, &args.graine, &config)?;

    display_stages(&report.stages);
    if !report.removals.is_empty() {
        display_removals(&report.removals);
    }

    if report.deduped.is_empty() {
        println!("Aucune combinaison ne survit aux étapes actives.");
    } else if args.scorer {
        display_scored(&report.scored, args.limite);
    } else {
        display_combos(&report.deduped, args.limite);
    }

    if let Some(path) = &args.export {
        export::write_combos(path, &report.deduped)?;
        println!("Combinaisons exportées dans {}", path.display());
    }
    if let Some(path) = &args.export_scores {
        export::write_scores(path, &report.scored)?;
        println!("Scores exportés dans {}", path.display());
    }
    if let Some(path) = &args.export_csv {
        export::write_csv(path, &report.scored)?;
        println!("CSV exporté dans {}", path.display());
    }
    if let Some(path) = &args.journal {
        export::write_journal(path, &report.stages)?;
        println!("Journal écrit dans {}", path.display());
    }

    Ok(())
}

fn cmd_scorer(combos: &[String]) -> Result<()> {
    if combos.is_empty() {
        bail!("Aucune combinaison fournie");
    }
    let parsed: Vec<Combo> = combos
        .iter()
        .map(|s| {
            s.parse::<Combo>()
                .with_context(|| format!("Combinaison invalide : '{}'", s))
        })
        .collect::<Result<_>>()?;
    let scored = rank(&parsed);
    display_scored(&scored, scored.len());
    Ok(())
}

/// Préréglage (s'il existe), puis drapeaux de la ligne de commande par
/// dessus. `--tous-filtres` active le jeu historique complet.
fn build_toggles(args: &GenererArgs) -> Result<FilterToggles> {
    let mut t = match &args.preset {
        Some(path) => preset::load(path)?,
        None => FilterToggles::default(),
    };

    if args.tous_filtres {
        let classic = FilterToggles::all_classic();
        t = FilterToggles {
            triples: t.triples || classic.triples,
            spread: t.spread || classic.spread,
            mirror_count: t.mirror_count || classic.mirror_count,
            high_ge8: t.high_ge8 || classic.high_ge8,
            vtrac_quad: t.vtrac_quad || classic.vtrac_quad,
            uniform_vtrac: t.uniform_vtrac || classic.uniform_vtrac,
            primes: t.primes || classic.primes,
            sum_trap: t.sum_trap || classic.sum_trap,
            mirror_sum: t.mirror_sum || classic.mirror_sum,
            ..t
        };
    }

    t.triples |= args.triples;
    t.spread |= args.ecart;
    t.mirror_count |= args.miroirs;
    t.high_ge8 |= args.hauts_ge8;
    t.vtrac_quad |= args.vtrac_quad;
    t.uniform_vtrac |= args.vtrac_uniforme;
    t.primes |= args.premiers;
    t.sum_trap |= args.somme_piege;
    t.mirror_sum |= args.somme_miroir;
    t.quint |= args.quinte;
    t.quad |= args.quadruple;
    t.double_single |= args.double_simple;
    t.double_double |= args.double_double;
    t.all_low |= args.tout_bas;
    t.consecutive_run |= args.suite3;
    t.mirror_pair |= args.paire_miroir;
    t.trailing_sum |= args.somme_finale;
    t.two_vtrac_groups |= args.vtrac_deux_groupes;
    t.three_gt5 |= args.hauts_gt5;

    Ok(t)
}

fn parse_sum_list(s: &str) -> Result<BTreeSet<u8>> {
    s.split(',')
        .map(|token| {
            let token = token.trim();
            match token.parse::<u8>() {
                Ok(n) if n <= 45 => Ok(n),
                _ => bail!("Somme invalide : '{}' (entier 0-45 attendu)", token),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args(extra: &[&str]) -> GenererArgs {
        let mut argv = vec![
            "dc5",
            "generer",
            "--chauds",
            "1,3",
            "--froids",
            "2",
            "--attendus",
            "5",
            "--graine",
            "1,5",
        ];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Generer(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_build_toggles_default_all_off() {
        let args = base_args(&[]);
        assert_eq!(build_toggles(&args).unwrap(), FilterToggles::default());
    }

    #[test]
    fn test_build_toggles_individual_flags() {
        let args = base_args(&["--triples", "--hauts-gt5"]);
        let t = build_toggles(&args).unwrap();
        assert!(t.triples);
        assert!(t.three_gt5);
        assert!(!t.spread);
    }

    #[test]
    fn test_build_toggles_tous_filtres() {
        let args = base_args(&["--tous-filtres"]);
        let t = build_toggles(&args).unwrap();
        assert_eq!(t, FilterToggles::all_classic());
    }

    #[test]
    fn test_tous_filtres_cumulates_with_extended_flags() {
        let args = base_args(&["--tous-filtres", "--quinte"]);
        let t = build_toggles(&args).unwrap();
        assert!(t.triples);
        assert!(t.quint);
    }

    #[test]
    fn test_parse_sum_list() {
        let sums = parse_sum_list("13, 17,21").unwrap();
        assert_eq!(sums, BTreeSet::from([13, 17, 21]));
        assert!(parse_sum_list("13,x").is_err());
        assert!(parse_sum_list("46").is_err());
    }
}
