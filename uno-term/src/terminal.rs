use std::io::{BufRead, Write};

use tracing::warn;
use uno_engine::{
    error::{Result, UnoError},
    io::{GameIo, HandPrompt},
};

/// Plays the game over a line-based text stream, normally stdin and stdout.
pub struct TerminalIo<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(UnoError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> GameIo for TerminalIo<R, W> {
    fn announce(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}") {
            warn!(%err, "failed to write to terminal");
        }
    }

    fn request_player_count(&mut self) -> Result<usize> {
        loop {
            let line = self.prompt("Enter the number of players: ")?;
            match line.trim().parse::<i64>() {
                Ok(count) if count >= 1 => return Ok(count as usize),
                Ok(_) => self.announce("Please enter a positive number of players."),
                Err(_) => self.announce("Invalid input. Please enter a number."),
            }
        }
    }

    fn request_player_name(&mut self, ordinal: usize) -> Result<String> {
        self.prompt(&format!("Enter the name of Player {ordinal}: "))
    }

    fn request_hand_index(&mut self, prompt: &HandPrompt<'_>) -> Result<i64> {
        loop {
            let line = self.prompt(&format!(
                "{}, your choice (0-{}): ",
                prompt.player_name,
                prompt.hand_size.saturating_sub(1)
            ))?;
            match line.trim().parse::<i64>() {
                Ok(index) => return Ok(index),
                Err(_) => self.announce("Invalid input. Please enter a valid card index."),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn terminal(input: &str) -> TerminalIo<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalIo::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(terminal: TerminalIo<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(terminal.into_output()).unwrap()
    }

    #[test]
    fn player_count_asks_again_on_bad_input() {
        let mut io = terminal("three\n0\n-2\n3\n");

        assert_eq!(io.request_player_count().unwrap(), 3);

        let output = output_of(io);
        assert_eq!(output.matches("Enter the number of players: ").count(), 4);
        assert!(output.contains("Invalid input. Please enter a number."));
        assert_eq!(
            output
                .matches("Please enter a positive number of players.")
                .count(),
            2
        );
    }

    #[test]
    fn player_name_keeps_inner_spaces() {
        let mut io = terminal("Ada Lovelace\r\n");

        assert_eq!(io.request_player_name(1).unwrap(), "Ada Lovelace");
        assert!(output_of(io).contains("Enter the name of Player 1: "));
    }

    #[test]
    fn hand_index_skips_non_numbers_but_passes_any_integer() {
        let mut io = terminal("red\n\n-1\n");
        let prompt = HandPrompt {
            player_name: "Ada",
            hand_size: 4,
        };

        assert_eq!(io.request_hand_index(&prompt).unwrap(), -1);

        let output = output_of(io);
        assert_eq!(output.matches("Ada, your choice (0-3): ").count(), 3);
        assert_eq!(
            output
                .matches("Invalid input. Please enter a valid card index.")
                .count(),
            2
        );
    }

    #[test]
    fn closed_input_is_reported() {
        let mut io = terminal("");

        let error = io.request_player_count().unwrap_err();
        assert!(matches!(error, UnoError::InputClosed));
    }

    #[test]
    fn announce_writes_a_line() {
        let mut io = terminal("");

        io.announce("UNO Game Started!");

        assert_eq!(output_of(io), "UNO Game Started!\n");
    }
}
