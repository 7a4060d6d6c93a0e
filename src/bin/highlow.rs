//! Interactive High-Low in the terminal.
//!
//! Renders each snapshot, offers the controls visible in the current phase
//! and forwards the picked one to the game as an event.
//!
//! Options: --seed, --config, --no-color, -v/-vv

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use dialoguer::Select;
use std::path::PathBuf;

use high_low::core::config::MAX_PLACEHOLDER_WIDTH;
use high_low::view::{self, Control};
use high_low::{AppConfig, DisplayConfig, HighLowGameBuilder, Outcome, Snapshot};

#[derive(Debug, Parser)]
#[command(name = "highlow", about = "Guess whether the next card is higher or lower")]
struct Args {
    /// Fixed RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file
    #[arg(long, default_value = "highlow.toml")]
    config: PathBuf,

    /// Disable terminal colors
    #[arg(long)]
    no_color: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging(args.verbose);

    let mut config = AppConfig::load_or_default(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(seed) = args.seed {
        config.game.seed = Some(seed);
    }
    if args.no_color {
        config.display.color = false;
    }
    colored::control::set_override(config.display.color);

    let mut game = HighLowGameBuilder::new().config(config.game).build();
    log::info!("replay this session with --seed {}", game.seed());

    loop {
        let snapshot = game.snapshot();
        println!("\n{}", draw(&snapshot, &config.display));

        let controls = view::controls(&snapshot);
        let Some(control) = prompt(&controls)? else {
            break;
        };
        game.dispatch(control.event);
    }

    Ok(())
}

fn logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Ask for one of `controls`; `None` means quit.
fn prompt(controls: &[Control]) -> anyhow::Result<Option<Control>> {
    let mut items: Vec<&str> = controls.iter().map(|c| c.label).collect();
    items.push("Quit");

    let selection = Select::new()
        .items(&items)
        .default(0)
        .report(false)
        .interact_opt()
        .context("reading selection")?;

    Ok(selection.and_then(|i| controls.get(i).copied()))
}

fn draw(snapshot: &Snapshot, display: &DisplayConfig) -> String {
    if !display.color {
        return view::render(snapshot, display);
    }

    let width = MAX_PLACEHOLDER_WIDTH;
    let left = format!("{:^width$}", view::face_text(snapshot.left, display));
    let right = format!("{:^width$}", view::face_text(snapshot.right, display));

    let mut out = format!(
        "{}  {}\n\n[ {} ]   [ {} ]\n",
        "High".bright_cyan().bold(),
        "Low".blue().bold(),
        left.bold(),
        right.blue().bold(),
    );
    if snapshot.shows_result() {
        match snapshot.outcome {
            Some(Outcome::Win) => out.push_str(&format!("\n{}\n", Outcome::Win.to_string().cyan().bold())),
            Some(Outcome::Lose) => out.push_str(&format!("\n{}\n", Outcome::Lose.to_string().red().bold())),
            None => {}
        }
    }
    out
}
