//! `termintro show`

use anyhow::Result;

use crate::animation::Engine;
use crate::config::Config;
use crate::theme::Theme;

use super::print_page;

/// Print the final page. Does not read or touch the session.
pub fn handle_show(config: &Config) -> Result<()> {
    let mut engine = Engine::landing(config.script.clone(), config.timing);
    engine.show_all_immediately();
    print_page(engine.surface(), &Theme::by_name(&config.display.theme))
}
