/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    io,
    sync::mpsc::{channel, Receiver, Sender},
    thread,
};

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use crate::{ConsoleCommand, Game, GameConfig, MoveOutcome, RulesError};

/// What the console should do after executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Print this text and keep going.
    Text(String),

    /// Stop reading commands.
    Exit,
}

/// A line-oriented host for a single [`Game`].
///
/// Commands are queued on a channel and executed one at a time on the thread that called [`Console::run`],
/// so the game only ever has one writer.
#[derive(Debug)]
pub struct Console {
    /// The game being played.
    game: Game,

    /// One half of a channel, responsible for sending commands to the console to execute.
    sender: Sender<ConsoleCommand>,

    /// One half of a channel, responsible for receiving commands for the console to execute.
    receiver: Receiver<ConsoleCommand>,
}

impl Console {
    /// Constructs a new [`Console`] around `game`, to be executed with [`Console::run`].
    pub fn new(game: Game) -> Self {
        let (sender, receiver) = channel();

        Self {
            game,
            sender,
            receiver,
        }
    }

    /// Returns the game being played.
    #[inline(always)]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Queues a [`ConsoleCommand`] to be executed once [`Console::run`] is called.
    pub fn send_command(&self, command: ConsoleCommand) -> Result<()> {
        self.sender
            .send(command)
            .context("Console command queue has been closed")
    }

    /// Execute the main loop of the console.
    ///
    /// This spawns a thread to read commands from `stdin`, then executes queued commands until told to exit.
    /// A command that fails is reported on `stderr` and the loop carries on.
    pub fn run(&mut self) -> Result<()> {
        let sender = self.sender.clone();
        thread::spawn(|| {
            if let Err(err) = input_handler(sender) {
                warn!("Input handler thread stopping: {err:#}");
            }
        });

        while let Ok(cmd) = self.receiver.recv() {
            debug!(?cmd, "executing command");

            match self.execute(cmd) {
                Ok(Response::Text(text)) => println!("{text}"),
                Ok(Response::Exit) => break,
                Err(e) => eprintln!("Error: {e:#}"),
            }
        }

        Ok(())
    }

    /// Executes a single [`ConsoleCommand`] against the game.
    pub fn execute(&mut self, cmd: ConsoleCommand) -> Result<Response> {
        let text = match cmd {
            ConsoleCommand::Captured => self.game.captured().to_string(),

            ConsoleCommand::Display => self.game.to_string(),

            ConsoleCommand::Exit => return Ok(Response::Exit),

            ConsoleCommand::Fen => {
                let side = if self.game.side_to_move().is_white() {
                    'w'
                } else {
                    'b'
                };
                format!("{} {side}", self.game.board().to_placement())
            }

            ConsoleCommand::Move { from, to } => match self.game.commit_move(from, to) {
                MoveOutcome::Accepted => format!("{from}{to}"),
                MoveOutcome::AcceptedWithCheckmate(winner) => {
                    format!("{from}{to}\nCheckmate: {winner} captured the King")
                }
                MoveOutcome::Rejected(reason) => return Err(RulesError::from(reason).into()),
            },

            ConsoleCommand::Moves { square, pretty } => {
                let moves = self.game.legal_destinations(square);

                if pretty {
                    moves.to_string()
                } else if moves.is_empty() {
                    String::from("(none)")
                } else {
                    moves
                        .into_iter()
                        .map(|sq| sq.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                }
            }

            ConsoleCommand::NewGame => {
                self.game.reset();
                String::from("New game")
            }

            ConsoleCommand::Option { name, value } => match value {
                Some(value) => self.set_option(&name, &value)?,
                None => self.get_option(&name)?,
            },

            ConsoleCommand::Place { piece, square } => {
                match self.game.board_mut().place(piece, square) {
                    Some(old) => format!("Placed {piece:?} on {square}, replacing {old:?}"),
                    None => format!("Placed {piece:?} on {square}"),
                }
            }

            ConsoleCommand::Take { square } => match self.game.board_mut().take(square) {
                Some(piece) => format!("Removed {piece:?} from {square}"),
                None => bail!("There is no piece on {square}"),
            },

            ConsoleCommand::Turn => self.game.turn().to_string(),
        };

        Ok(Response::Text(text))
    }

    /// Sets the option `name` to `value`, returning a confirmation.
    fn set_option(&mut self, name: &str, value: &str) -> Result<String> {
        match name.to_ascii_lowercase().as_str() {
            "turns" => {
                let enforce_turns = parse_switch(value)?;
                self.game.set_config(GameConfig { enforce_turns });
                Ok(format!("turns := {}", switch_name(enforce_turns)))
            }

            _ => bail!("{} has no option named {name:?}", env!("CARGO_PKG_NAME")),
        }
    }

    /// Returns the current value of the option `name`.
    fn get_option(&self, name: &str) -> Result<String> {
        match name.to_ascii_lowercase().as_str() {
            "turns" => Ok(format!(
                "turns := {}",
                switch_name(self.game.config().enforce_turns)
            )),

            _ => bail!("{} has no option named {name:?}", env!("CARGO_PKG_NAME")),
        }
    }
}

/// Parses an on/off option value.
fn parse_switch(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => bail!("Expected one of [on, off]. Got {value:?}"),
    }
}

#[inline(always)]
fn switch_name(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

/// Loops endlessly to await input via `stdin`, sending all successfully-parsed commands through the supplied `sender`.
fn input_handler(sender: Sender<ConsoleCommand>) -> Result<()> {
    let mut buffer = String::with_capacity(256);

    loop {
        // Clear the buffer, read input, and trim the trailing newline
        buffer.clear();
        let bytes = match io::stdin().read_line(&mut buffer) {
            Ok(bytes) => bytes,
            Err(err) => {
                // Make sure the console stops waiting on us
                _ = sender.send(ConsoleCommand::Exit);
                return Err(err).context("Failed to read line from stdin");
            }
        };

        // For ctrl + d
        if 0 == bytes {
            sender
                .send(ConsoleCommand::Exit)
                .context("Failed to send 'exit' command after receiving empty input")?;

            return Ok(());
        }

        let line = buffer.trim();

        // Ignore empty lines
        if line.is_empty() {
            continue;
        }

        match line.parse::<ConsoleCommand>() {
            Ok(cmd) => sender
                .send(cmd)
                .context("Failed to send command to console")?,

            // Clap's help output is an "error" too, so print it as-is
            Err(err) => eprintln!("{err}"),
        }
    }
}
