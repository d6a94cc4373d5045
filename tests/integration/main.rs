//! CLI integration tests.

mod helpers;

mod config_test;
mod play_test;
mod reset_test;
mod show_test;
