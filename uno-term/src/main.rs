mod settings;
mod terminal;

use std::io;

use color_eyre::eyre::{Result, WrapErr};
use settings::Settings;
use terminal::TerminalIo;
use tracing::info;
use uno_engine::{error::UnoError, io::collect_player_names, uno::Uno};

type StdTerminal = TerminalIo<io::StdinLock<'static>, io::Stdout>;

fn run(settings: &Settings, terminal: &mut StdTerminal) -> Result<(), UnoError> {
    let player_names = collect_player_names(terminal)?;

    let mut game = match settings.seed {
        Some(seed) => Uno::with_seed(player_names, seed)?,
        None => Uno::new(player_names)?,
    };

    game.start(terminal, settings.hand_size);
    let winner = game.play(terminal)?;
    info!(winner, turns = game.get_turns_played(), "game finished");

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let settings = Settings::from_env().wrap_err("Invalid settings")?;

    // Logs go to stderr so they never interleave with the game on stdout.
    tracing_subscriber::fmt()
        .with_max_level(settings.log_level)
        .with_writer(io::stderr)
        .init();

    let mut terminal = TerminalIo::new(io::stdin().lock(), io::stdout());

    match run(&settings, &mut terminal) {
        Err(UnoError::InputClosed) => {
            info!("input closed, leaving the game");
            Ok(())
        }
        result => result.wrap_err("The game stopped unexpectedly"),
    }
}
