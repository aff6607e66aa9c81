//! Generate default generator configuration file
//!
//! Creates a JSON config with all default parameters

use std::{env, path::Path, process};

use swatch_forge::GeneratorConfig;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/swatch.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = GeneratorConfig::default();

    match config.to_json_file(output_path) {
        Ok(()) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  Clamp policy:  {:?}", config.clamp_policy);
            eprintln!(
                "  Shades/tints:  {} steps, {:?} normalization",
                config.default_steps, config.normalization
            );
            eprintln!("  Harmony rule:  {}", config.default_rule);
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
