/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use anyhow::Result;
use clap::Parser;
use tilechess::{Cli, Console, ConsoleCommand};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so that stdout only carries command responses
    let filter = match &cli.log {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut console = Console::new(cli.game()?);

    // Commands given on the command line run before anything read from stdin
    for line in &cli.exec {
        match line.parse::<ConsoleCommand>() {
            Ok(cmd) => console.send_command(cmd)?,
            Err(e) => eprintln!("ERROR on input {line:?}:\n{e}"),
        }
    }

    if let Err(e) = console.run() {
        eprintln!("{} encountered an error: {e}", env!("CARGO_PKG_NAME"));
    }

    Ok(())
}
