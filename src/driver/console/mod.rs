use log::{debug, info};
use std::io::{BufRead, Write};

use super::{
    forfeit_message, prompt, retry_message, Driver, DriverError, INVALID_GUESS_MESSAGE,
    INVALID_SYNTAX_MESSAGE,
};
use crate::game::{Forfeit, ForfeitReason, Game, Outcome};


/// A driver for two people sharing a terminal, or any line-based reader and writer.
pub struct ConsoleDriver<R, W> {
    /// The round being played.
    game: Game,
    /// Where guesses come from, one per line.
    input: R,
    /// Where prompts and messages go.
    output: W,
}

impl<R: BufRead, W: Write> ConsoleDriver<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        ConsoleDriver {
            game,
            input,
            output,
        }
    }

    #[allow(dead_code)]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Give back the output sink, e.g. to inspect what was written.
    #[allow(dead_code)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line, without its line terminator. `None` at end of input.
    fn read_guess(&mut self) -> Result<Option<String>, DriverError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Driver for ConsoleDriver<R, W> {
    fn play(&mut self) -> Result<Forfeit, DriverError> {
        loop {
            writeln!(self.output, "{}", prompt(&self.game.state))?;
            self.output.flush()?;

            let Some(guess) = self.read_guess()? else {
                return Err(DriverError::InputClosed);
            };

            match self.game.submit_guess(&guess) {
                Outcome::InvalidSyntax => {
                    debug!("Rejected malformed guess {:?}", guess);
                    writeln!(self.output, "{}", INVALID_SYNTAX_MESSAGE)?;
                }
                Outcome::Accepted { .. } => {}
                Outcome::InvalidGuess { hit_points, .. } => {
                    writeln!(self.output, "{}", INVALID_GUESS_MESSAGE)?;
                    writeln!(self.output, "{}", retry_message(hit_points))?;
                }
                Outcome::Forfeited(forfeit) => {
                    if forfeit.reason == ForfeitReason::ThreeStrikes {
                        writeln!(self.output, "{}", INVALID_GUESS_MESSAGE)?;
                    }
                    writeln!(self.output, "{}", forfeit_message(&forfeit, &self.game.state))?;
                    self.output.flush()?;
                    info!("Game complete!");
                    return Ok(forfeit);
                }
                Outcome::GameOver => {
                    if let Some(forfeit) = self.game.forfeit() {
                        return Ok(forfeit);
                    }
                }
            }
        }
    }
}
