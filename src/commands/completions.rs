//! `termintro completions`

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

/// Write completions for `shell` to stdout.
pub fn handle_completions(shell: Shell) {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "termintro", &mut io::stdout());
}
