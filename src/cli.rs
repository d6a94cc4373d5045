//! Command-line interface definitions.

use clap::{ArgAction, Args, Parser, Subcommand};

/// Play a scripted terminal typing intro, once per session.
#[derive(Debug, Parser)]
#[command(name = "termintro", version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play the intro (animated on the first visit of a session)
    Play(PlayArgs),
    /// Print the final page without animation or session tracking
    Show,
    /// End the current session so the next play animates again
    Reset {
        /// Session id (defaults to $TERMINTRO_SESSION, then the parent shell)
        #[arg(long)]
        session: Option<String>,
    },
    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// URL of the referring page; same-origin referrers skip the animation
    #[arg(long)]
    pub referrer: Option<String>,

    /// Origin of the current page (defaults to site.origin from config)
    #[arg(long)]
    pub origin: Option<String>,

    /// Session id (defaults to $TERMINTRO_SESSION, then the parent shell)
    #[arg(long)]
    pub session: Option<String>,

    /// Skip the animation even on a first visit
    #[arg(long)]
    pub instant: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn play_parses_navigation_flags() {
        let cli = Cli::parse_from([
            "termintro",
            "play",
            "--referrer",
            "https://example.com/a",
            "--origin",
            "https://example.com",
            "--instant",
        ]);
        let Commands::Play(args) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.referrer.as_deref(), Some("https://example.com/a"));
        assert_eq!(args.origin.as_deref(), Some("https://example.com"));
        assert!(args.instant);
        assert_eq!(args.session, None);
    }

    #[test]
    fn verbose_is_global_and_counted() {
        let cli = Cli::parse_from(["termintro", "show", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}
