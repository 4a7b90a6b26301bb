//! Console input agent

use std::io::{BufRead, BufReader, Write, stdin, stdout};

use crate::{Result, agent::Agent, board::BoardState};

/// Human player reading 1-indexed cell numbers from an input stream.
///
/// Invalid input (non-numeric, out of range, occupied cell) re-prompts
/// silently without consuming the turn. The input source is injectable so
/// tests can script a session.
pub struct HumanAgent {
    name: String,
    input: Box<dyn BufRead + Send>,
}

impl HumanAgent {
    /// Create a human agent reading from stdin
    pub fn new(name: String) -> Self {
        Self::with_reader(name, Box::new(BufReader::new(stdin())))
    }

    /// Create a human agent reading from the given stream
    pub fn with_reader(name: String, input: Box<dyn BufRead + Send>) -> Self {
        Self { name, input }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(crate::Error::InputClosed);
        }
        Ok(line)
    }
}

impl Agent for HumanAgent {
    fn select_move(&mut self, board: &BoardState) -> Result<usize> {
        if board.empty_positions().is_empty() {
            return Err(crate::Error::NoValidMoves);
        }

        loop {
            print!("{} (1-9) > ", board.to_move);
            stdout().flush().map_err(|source| crate::Error::Io {
                operation: "flush prompt".to_string(),
                source,
            })?;

            let line = self.read_line()?;
            let Ok(entered) = line.trim().parse::<usize>() else {
                continue;
            };
            if !(1..=9).contains(&entered) {
                continue;
            }

            let pos = entered - 1;
            if board.is_empty(pos) {
                return Ok(pos);
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
