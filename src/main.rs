//! Terminal bowling scorer (default binary).
//!
//! Reads pin counts from stdin (or `--rolls`), feeds them to the scorer and
//! prints the scoreboard after every ball.

use std::io::{self, Write};

use anyhow::{anyhow, Result};

use bowling_score::config::{CliConfig, OutputFormat};
use bowling_score::core::{Game, ShotMark};
use bowling_score::input::PinPrompt;
use bowling_score::term::ScoreboardPrinter;
use bowling_score::types::GameCommand;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = CliConfig::from_env(&args)?;
    log::debug!("config: {:?}", config);

    let mut game = Game::new();
    match &config.rolls {
        Some(rolls) => run_scripted(&mut game, rolls, &config),
        None => run_interactive(&mut game, &config),
    }
}

fn run_scripted(game: &mut Game, rolls: &[i32], config: &CliConfig) -> Result<()> {
    for (n, &pins) in rolls.iter().enumerate() {
        game.add_shot(pins)
            .map_err(|e| anyhow!("ball {} ({} pins): {}", n + 1, pins, e))?;
    }

    let mut stdout = io::stdout().lock();
    report(game, config, &mut stdout)
}

fn run_interactive(game: &mut Game, config: &CliConfig) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut prompt = PinPrompt::new(stdin, stdout);
    let mut printer = ScoreboardPrinter::new(config.color);

    prompt.say("Start the game")?;
    while !game.is_over() {
        let Some(cmd) = prompt.next_command()? else {
            break;
        };
        match cmd {
            GameCommand::Quit => return Ok(()),
            GameCommand::Reset => {
                game.reset();
                printer.print(&game.snapshot(), prompt.output_mut())?;
            }
            GameCommand::Shot(pins) => match game.add_shot(pins) {
                Ok(mark) => {
                    match mark {
                        ShotMark::Strike => prompt.say("Strike!")?,
                        ShotMark::Spare => prompt.say("Spare!")?,
                        ShotMark::Pins(_) => {}
                    }
                    printer.print(&game.snapshot(), prompt.output_mut())?;
                }
                Err(e) => prompt.say(&e.to_string())?,
            },
        }
    }

    if config.format == OutputFormat::Json {
        report(game, config, prompt.output_mut())?;
    }
    Ok(())
}

fn report<W: Write>(game: &Game, config: &CliConfig, out: &mut W) -> Result<()> {
    let snap = game.snapshot();
    match config.format {
        OutputFormat::Text => ScoreboardPrinter::new(config.color).print(&snap, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &snap)?;
            writeln!(out)?;
            out.flush()?;
            Ok(())
        }
    }
}
