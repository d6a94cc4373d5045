//! `termintro play`

use anyhow::Result;

use crate::animation::Engine;
use crate::cli::PlayArgs;
use crate::config::Config;
use crate::intro::{initialize_page, Visit};
use crate::origin::Navigation;
use crate::player::{self, PlaybackResult};
use crate::session::{session_id, FileSessionStore, VisitTracker};
use crate::theme::Theme;

use super::print_page;

/// Play the intro, animating only on the first visit of the session.
///
/// Without a terminal on stdout (or with `--instant`) the final page is
/// printed straight away.
#[cfg(not(tarpaulin_include))]
pub fn handle_play(args: &PlayArgs, config: &Config) -> Result<()> {
    let nav = Navigation::new(
        args.referrer.clone(),
        args.origin.clone().unwrap_or_else(|| config.site.origin.clone()),
    );

    let id = session_id(args.session.as_deref());
    let store = FileSessionStore::open_or_fresh(FileSessionStore::default_path(&id));
    let mut tracker = VisitTracker::new(store);

    let mut engine = Engine::landing(config.script.clone(), config.timing);
    let visit = initialize_page(&mut engine, &mut tracker, &nav);
    let theme = Theme::by_name(&config.display.theme);

    let animate = visit == Visit::First && !args.instant && atty::is(atty::Stream::Stdout);
    if animate {
        if player::play(&mut engine, &theme, &config.display)? == PlaybackResult::Interrupted {
            eprintln!("{}", theme.dim_text("Intro interrupted"));
        }
        return Ok(());
    }

    engine.run_until_idle();
    print_page(engine.surface(), &theme)
}
