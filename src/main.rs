use anyhow::Result;
use clap::Parser;

use termintro::cli::{Cli, Commands, ConfigCommands};
use termintro::commands;
use termintro::logging::init_logging;
use termintro::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Play(args) => commands::play::handle_play(&args, &Config::load()?),
        Commands::Show => commands::show::handle_show(&Config::load()?),
        Commands::Reset { session } => commands::reset::handle_reset(session.as_deref()),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&Config::load()?),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => {
            commands::completions::handle_completions(shell);
            Ok(())
        }
    }
}
