pub mod check;
pub mod config;
pub mod context;
pub mod init;

pub use check::{execute_review, run_check, run_check_impl};
pub use config::{render_effective, run_config, run_config_show_impl};
pub use init::{generate_config_template, run_init, run_init_impl};

use crate::cli::ColorChoice;
use crate::output::ColorMode;

#[must_use]
pub const fn color_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}
