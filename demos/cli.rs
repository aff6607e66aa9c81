//! Command-line interface for swatch_forge
//!
//! Convert a color, derive a harmony palette, or generate shades and tints.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use swatch_forge::{
    describe, ColorError, GeneratorConfig, HarmonyRule, PaletteDeriver, ShadeTintDeriver,
    StepNormalization,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "swatch", about = "Color conversion and palette generation")]
struct Cli {
    /// JSON generator configuration (see the generate_config example)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of swatch lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show hex, RGB, HSL and Lab for a color
    Convert { color: String },
    /// Derive a five-color harmony palette
    Palette {
        color: String,
        #[arg(long, value_enum)]
        rule: Option<RuleArg>,
    },
    /// Generate shades and tints
    Shades {
        color: String,
        #[arg(long)]
        steps: Option<usize>,
        #[arg(long, value_enum)]
        normalization: Option<NormalizationArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleArg {
    Complementary,
    Triadic,
    Analogous,
    Monochromatic,
    SplitComplementary,
}

impl From<RuleArg> for HarmonyRule {
    fn from(value: RuleArg) -> Self {
        match value {
            RuleArg::Complementary => HarmonyRule::Complementary,
            RuleArg::Triadic => HarmonyRule::Triadic,
            RuleArg::Analogous => HarmonyRule::Analogous,
            RuleArg::Monochromatic => HarmonyRule::Monochromatic,
            RuleArg::SplitComplementary => HarmonyRule::SplitComplementary,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum NormalizationArg {
    Even,
    Tenths,
}

impl From<NormalizationArg> for StepNormalization {
    fn from(value: NormalizationArg) -> Self {
        match value {
            NormalizationArg::Even => StepNormalization::Even,
            NormalizationArg::Tenths => StepNormalization::Tenths,
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        eprintln!("Error: {}", error);
        if error.is_input_error() {
            eprintln!("Suggestion: {}", error.user_message());
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> swatch_forge::Result<()> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_json_file(path)?,
        None => GeneratorConfig::default(),
    };

    match cli.command {
        Command::Convert { color } => {
            let info = describe(&color)?;
            if cli.json {
                print_json(&info)?;
            } else {
                println!("hex  {}", info.hex);
                println!("rgb  {}", info.rgb.to_css_rgb());
                println!("hsl  {}", info.hsl.to_css());
                println!("lab  L*={:.1} a*={:.1} b*={:.1}", info.lab.l, info.lab.a, info.lab.b);
                if let Some(name) = &info.name {
                    println!("name {}", name);
                }
            }
        }
        Command::Palette { color, rule } => {
            let rule = rule.map(HarmonyRule::from).unwrap_or(config.default_rule);
            let base = describe(&color)?.rgb;
            let palette = PaletteDeriver::from_config(&config).derive(base, rule);
            if cli.json {
                print_json(&palette)?;
            } else {
                eprintln!("{} palette of {}", rule, base);
                for color in palette.iter() {
                    println!("{}", color);
                }
            }
        }
        Command::Shades {
            color,
            steps,
            normalization,
        } => {
            if let Some(normalization) = normalization {
                config.normalization = normalization.into();
            }
            let steps = steps.unwrap_or(config.default_steps);
            let base = describe(&color)?.rgb;
            let set = ShadeTintDeriver::from_config(&config).derive(base, steps)?;
            if cli.json {
                print_json(&set)?;
            } else {
                println!("{:<8} {:<8} {}", "step", "shade", "tint");
                for (i, (shade, tint)) in set.shades.iter().zip(&set.tints).enumerate() {
                    println!("{:<8} {:<8} {}", i + 1, shade.to_hex(), tint);
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), ColorError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
