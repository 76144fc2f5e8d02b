/// Preview — interactive shell for browsing templates and rolling objectives.
///
/// Usage: preview [--seed <n>] [--options <file.ron>]
///
/// Commands:
///   options                   show toggles and their state
///   toggle <key> <on|off>     flip a toggle (key may omit the game prefix)
///   list                      list templates for the current toggles
///   roll <n>                  materialise n objectives drawn by weight
///   seed <n>                  reseed the RNG
///   help                      list commands
///   quit                      exit

use objective_engine::core::game::Game;
use objective_engine::core::template::TemplateDefinition;
use objective_engine::games::sea_of_thieves::{SeaOfThievesGame, SeaOfThievesOptions};
use objective_engine::schema::options::ToggleSet;
use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const KEY_PREFIX: &str = "sea_of_thieves_include_";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut seed: u64 = 42;
    let mut options = SeaOfThievesOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return;
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            "--options" if i + 1 < args.len() => {
                i += 1;
                match SeaOfThievesOptions::load_from_ron(Path::new(&args[i])) {
                    Ok(loaded) => options = loaded,
                    Err(e) => {
                        eprintln!("ERROR: Failed to load options file: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let game = SeaOfThievesGame::new();
    let mut rng = StdRng::seed_from_u64(seed);

    println!("Game: {}", game.metadata().name);
    println!("Seed: {}", seed);
    println!("Type 'help' for commands.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            "options" => {
                for toggle in SeaOfThievesOptions::schema() {
                    let state = if options.get(toggle.key) { "on" } else { "off" };
                    println!("  {:<40} {:<3}  {}", toggle.key, state, toggle.display_name);
                }
            }
            "toggle" => {
                if parts.len() < 3 {
                    println!("Usage: toggle <key> <on|off>");
                    println!("  keys: pvp, fishing, tall_tales, emergent_events, social");
                    continue;
                }
                let value = match parts[2] {
                    "on" | "true" | "1" => true,
                    "off" | "false" | "0" => false,
                    other => {
                        println!("Expected on/off, got '{}'", other);
                        continue;
                    }
                };
                let key = if parts[1].starts_with(KEY_PREFIX) {
                    parts[1].to_string()
                } else {
                    format!("{}{}", KEY_PREFIX, parts[1])
                };
                if options.set(&key, value) {
                    println!("{} = {}", key, value);
                } else {
                    println!("Unknown option: {}", parts[1]);
                }
            }
            "list" => {
                let templates = game.objective_templates(&options);
                println!("{} templates:", templates.len());
                for (n, template) in templates.iter().enumerate() {
                    println!("  {:>2}. {}", n + 1, describe(template));
                }
            }
            "roll" => {
                let count: usize = match parts.get(1).map(|s| s.parse()) {
                    None => 1,
                    Some(Ok(n)) if n > 0 => n,
                    _ => {
                        println!("Invalid count: {}", parts[1]);
                        continue;
                    }
                };

                let templates = game.objective_templates(&options);
                let dist = match WeightedIndex::new(templates.iter().map(|t| t.weight)) {
                    Ok(d) => d,
                    Err(e) => {
                        println!("ERROR: {}", e);
                        continue;
                    }
                };

                println!();
                for _ in 0..count {
                    let template = &templates[dist.sample(&mut rng)];
                    match template.materialize(&mut rng) {
                        Ok(objective) => {
                            let mut flags = Vec::new();
                            if objective.is_difficult {
                                flags.push("difficult");
                            }
                            if objective.is_time_consuming {
                                flags.push("time consuming");
                            }
                            if flags.is_empty() {
                                println!("  {}", objective.text);
                            } else {
                                println!("  {}  [{}]", objective.text, flags.join(", "));
                            }
                        }
                        Err(e) => println!("  ERROR: {}", e),
                    }
                }
                println!();
            }
            "seed" => {
                if parts.len() < 2 {
                    println!("Current seed: {}", seed);
                    continue;
                }
                match parts[1].parse::<u64>() {
                    Ok(s) => {
                        seed = s;
                        rng = StdRng::seed_from_u64(seed);
                        println!("Seed set to {}", seed);
                    }
                    Err(_) => {
                        println!("Invalid seed: {}", parts[1]);
                    }
                }
            }
            _ => {
                println!("Unknown command: {}. Type 'help' for commands.", cmd);
            }
        }
    }
}

fn describe(template: &TemplateDefinition) -> String {
    let tokens = template.binding_tokens();
    let mut out = format!("{} (weight {})", template.label, template.weight);
    if !tokens.is_empty() {
        let sizes: Vec<String> = tokens
            .iter()
            .map(|t| format!("{}: {}", t, template.bindings[*t].producer.cardinality()))
            .collect();
        out.push_str(&format!(" {{{}}}", sizes.join(", ")));
    }
    if template.is_difficult {
        out.push_str(" [difficult]");
    }
    if template.is_time_consuming {
        out.push_str(" [time consuming]");
    }
    out
}

fn print_usage() {
    println!("Usage: preview [--seed <n>] [--options <file.ron>]");
}

fn print_help() {
    println!("Commands:");
    println!("  options                 show toggles and their state");
    println!("  toggle <key> <on|off>   flip a toggle (e.g. toggle pvp on)");
    println!("  list                    list templates for the current toggles");
    println!("  roll <n>                materialise n objectives drawn by weight");
    println!("  seed <n>                reseed the RNG");
    println!("  help                    show this help");
    println!("  quit                    exit");
}
