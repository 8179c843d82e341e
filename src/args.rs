pub mod config;
pub mod types;
pub mod validation;

pub use config::{Settings, load_settings};
pub use types::{Args, Command};

use clap::Parser;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}
