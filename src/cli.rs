/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::str::FromStr;

use anyhow::Result;
use clap::Parser;

use crate::{Color, Game, GameConfig, Piece, Square};

/// Command-line arguments of the `tilechess` console.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Let either side move at any time, instead of alternating turns.
    #[arg(long, default_value = "false")]
    pub free_play: bool,

    /// Start from this FEN piece placement instead of the opening layout.
    #[arg(long, value_name = "PLACEMENT")]
    pub placement: Option<String>,

    /// The side to move first.
    #[arg(long, default_value = "white")]
    pub side: Color,

    /// Log filter directives, such as `debug` or `tilechess=trace`. Falls back to `RUST_LOG`.
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    /// A console command to run before reading from `stdin`. May be repeated.
    #[arg(short = 'x', long = "exec", value_name = "COMMAND")]
    pub exec: Vec<String>,
}

impl Cli {
    /// Returns the [`GameConfig`] described by these arguments.
    #[inline(always)]
    pub fn config(&self) -> GameConfig {
        GameConfig {
            enforce_turns: !self.free_play,
        }
    }

    /// Builds the starting [`Game`] described by these arguments.
    pub fn game(&self) -> Result<Game> {
        let game = match &self.placement {
            Some(placement) => Game::from_placement(placement, self.side, self.config())?,
            None if self.side.is_white() => Game::new(self.config()),
            None => Game::from_placement(crate::PLACEMENT_STARTPOS, self.side, self.config())?,
        };

        Ok(game)
    }
}

/// A command to be sent to the console.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(
    multicall = true,
    about,
    rename_all = "lower",
    override_usage("<CONSOLE COMMAND>")
)]
pub enum ConsoleCommand {
    /// Show which pieces have been captured by each side, and the material balance.
    Captured,

    /// Print the board and the side to move.
    #[command(alias = "d")]
    Display,

    /// Quit the console.
    #[command(alias = "quit")]
    Exit,

    /// Print the piece placement and side to move, in FEN notation.
    Fen,

    /// Move the piece on one square to another, if the rules allow it.
    #[command(aliases = ["m", "mv"])]
    Move { from: Square, to: Square },

    /// Show every square the piece on the provided square may move to.
    Moves {
        square: Square,

        /// If set, the destinations will be displayed on a grid.
        #[arg(short, long, default_value = "false")]
        pretty: bool,
    },

    /// Clear all captures and start over from the opening layout.
    #[command(aliases = ["reset", "new"])]
    NewGame,

    /// Display the current value of an option, or set it if a value is given.
    ///
    /// Available options: `turns` (on/off).
    Option { name: String, value: Option<String> },

    /// Place a piece on the provided square, replacing whatever was there.
    ///
    /// Uppercase letters are White pieces and lowercase are Black.
    Place { piece: Piece, square: Square },

    /// Remove the piece on the provided square.
    Take { square: Square },

    /// Show whose turn it is.
    Turn,
}

impl FromStr for ConsoleCommand {
    type Err = clap::Error;
    /// Attempt to parse a [`ConsoleCommand`] from a line of input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse_from(s.split_ascii_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_aliases() {
        let expected = ConsoleCommand::Move {
            from: Square::E2,
            to: Square::E4,
        };

        assert_eq!("move e2 e4".parse::<ConsoleCommand>().unwrap(), expected);
        assert_eq!("m e2 e4".parse::<ConsoleCommand>().unwrap(), expected);
        assert_eq!("mv e2 e4".parse::<ConsoleCommand>().unwrap(), expected);
    }

    #[test]
    fn test_parse_place() {
        let cmd: ConsoleCommand = "place q d4".parse().unwrap();
        assert_eq!(
            cmd,
            ConsoleCommand::Place {
                piece: "q".parse().unwrap(),
                square: Square::D4
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_squares() {
        assert!("move e2 e9".parse::<ConsoleCommand>().is_err());
        assert!("moves".parse::<ConsoleCommand>().is_err());
        assert!("fly e2".parse::<ConsoleCommand>().is_err());
    }

    #[test]
    fn test_cli_config() {
        let cli = Cli::try_parse_from(["tilechess", "--free-play"]).unwrap();
        assert!(!cli.config().enforce_turns);

        let cli = Cli::try_parse_from(["tilechess"]).unwrap();
        assert!(cli.config().enforce_turns);
        assert_eq!(cli.side, Color::White);
    }

    #[test]
    fn test_cli_custom_start() {
        let cli = Cli::try_parse_from([
            "tilechess",
            "--placement",
            "4k3/8/8/8/8/8/8/4K3",
            "--side",
            "black",
        ])
        .unwrap();

        let game = cli.game().unwrap();
        assert_eq!(game.board().count(), 2);
        assert_eq!(game.side_to_move(), Color::Black);
    }
}
