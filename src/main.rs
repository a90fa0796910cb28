#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use navalgrid::{
    init_logging, render_grid, render_pattern, EffectPlacement, Level, Scenario, ShapeKind,
    ShipPlacement, LEGEND,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use std::fmt::Write;
#[cfg(feature = "std")]
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about = "Place ships on a 10x10 grid and overlay ability areas", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, value_enum, default_value_t = LevelArg::Master)]
    level: LevelArg,
    /// Replace the fleet, e.g. --ship h@1,1 --ship dl@0,9
    #[arg(long = "ship", value_name = "ORIENTATION@ROW,COL")]
    ships: Vec<ShipPlacement>,
    /// Replace the master-level abilities, e.g. --effect cross@5,5
    #[arg(long = "effect", value_name = "SHAPE@ROW,COL")]
    effects: Vec<EffectPlacement>,
    /// Skip the 5x5 pattern dumps after the master-level grid.
    #[arg(long)]
    no_patterns: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum LevelArg {
    Novice,
    Adventurer,
    Master,
}

#[cfg(feature = "std")]
impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Novice => Level::Novice,
            LevelArg::Adventurer => Level::Adventurer,
            LevelArg::Master => Level::Master,
        }
    }
}

#[cfg(feature = "std")]
fn run(cli: &Cli) -> anyhow::Result<String> {
    let level = Level::from(cli.level);
    let fleet = if cli.ships.is_empty() {
        level.fleet()
    } else {
        cli.ships.as_slice()
    };
    let effects = match level {
        Level::Master if !cli.effects.is_empty() => cli.effects.as_slice(),
        _ => {
            if !cli.effects.is_empty() {
                log::warn!("--effect is ignored below the master level");
            }
            level.effects()
        }
    };

    log::info!("level {:?}: {} ships, {} effects", level, fleet.len(), effects.len());
    let scenario = Scenario::run(fleet, effects)?;

    let mut out = String::new();
    match level {
        Level::Novice | Level::Adventurer => {
            writeln!(
                out,
                "Board with {} ships placed (0 = water, 3 = ship):",
                fleet.len()
            )?;
            out.push_str(&render_grid(scenario.base()));
        }
        Level::Master => {
            writeln!(out, "Board with {} ships and abilities applied:", fleet.len())?;
            out.push_str(&render_grid(scenario.combined()));
            writeln!(out, "{}", LEGEND)?;
            if !cli.no_patterns {
                for shape in ShapeKind::ALL {
                    writeln!(out)?;
                    writeln!(out, "Pattern {}:", shape)?;
                    out.push_str(&render_pattern(&shape.pattern()));
                }
            }
        }
    }
    Ok(out)
}

#[cfg(feature = "std")]
fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Error: {}", err);
            ExitCode::from(1)
        }
    }
}
