/// Objective Linter — validates every template a game can produce.
///
/// Usage: objective_linter [<options.ron>]
///
/// Without an options file, every combination of toggles is checked.

use objective_engine::core::game::Game;
use objective_engine::core::template::TemplateDefinition;
use objective_engine::games::sea_of_thieves::{SeaOfThievesGame, SeaOfThievesOptions};
use objective_engine::schema::options::ToggleSet;
use rustc_hash::FxHashSet;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        println!("Usage: objective_linter [<options.ron>]");
        process::exit(0);
    }

    let game = SeaOfThievesGame::new();

    let option_sets: Vec<SeaOfThievesOptions> = if let Some(path) = args.get(1) {
        match SeaOfThievesOptions::load_from_ron(Path::new(path)) {
            Ok(options) => vec![options],
            Err(e) => {
                eprintln!("ERROR: Failed to load options file: {}", e);
                process::exit(1);
            }
        }
    } else {
        all_combinations::<SeaOfThievesOptions>()
    };

    println!(
        "Linting {} with {} option set(s)",
        game.metadata().name,
        option_sets.len()
    );

    let (mut errors, mut warnings) = lint_catalog(&game);
    for options in &option_sets {
        let templates = game.objective_templates(options);
        let (e, w) = lint_templates(&templates, &options.enabled_keys());
        errors.extend(e);
        warnings.extend(w);
    }

    // The same template shows up under many option sets
    dedup(&mut errors);
    dedup(&mut warnings);

    println!("\n=== Objective Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

/// Every on/off assignment of a toggle set's schema.
fn all_combinations<T: ToggleSet + Default>() -> Vec<T> {
    let schema = T::schema();
    (0u32..(1 << schema.len()))
        .map(|mask| {
            let mut options = T::default();
            for (bit, toggle) in schema.iter().enumerate() {
                options.set(toggle.key, mask & (1 << bit) != 0);
            }
            options
        })
        .collect()
}

fn lint_catalog(game: &SeaOfThievesGame) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for (name, table) in game.catalog().tables() {
        if table.is_empty() {
            errors.push(format!("Catalog table '{}' is empty", name));
            continue;
        }
        let mut seen = FxHashSet::default();
        for entry in table {
            if entry.trim().is_empty() {
                errors.push(format!("Catalog table '{}' has a blank entry", name));
            }
            if !seen.insert(*entry) {
                warnings.push(format!(
                    "Catalog table '{}' lists '{}' more than once",
                    name, entry
                ));
            }
        }
    }

    (errors, warnings)
}

fn lint_templates(
    templates: &[TemplateDefinition],
    enabled: &[&str],
) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let context = if enabled.is_empty() {
        "base".to_string()
    } else {
        enabled.join(", ")
    };

    let mut labels = FxHashSet::default();
    for template in templates {
        if !labels.insert(template.label.as_str()) {
            errors.push(format!(
                "Template '{}' appears twice with options [{}]",
                template.label, context
            ));
        }

        let report = template.check();
        for e in report.errors {
            errors.push(format!("{} (options [{}])", e, context));
        }
        warnings.extend(report.warnings);

        for token in template.binding_tokens() {
            let binding = &template.bindings[token];
            if binding.arity as u64 > binding.producer.cardinality() {
                errors.push(format!(
                    "Template '{}' draws {} value(s) for {} but only {} exist",
                    template.label,
                    binding.arity,
                    token,
                    binding.producer.cardinality()
                ));
            }
            if binding.producer.cardinality() == 1 {
                warnings.push(format!(
                    "Template '{}' binds {} to a single value",
                    template.label, token
                ));
            }
        }
    }

    (errors, warnings)
}

fn dedup(messages: &mut Vec<String>) {
    let mut seen = FxHashSet::default();
    messages.retain(|m| seen.insert(m.clone()));
}
