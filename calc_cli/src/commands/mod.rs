//! CLI command implementations

mod catalog;
mod config;
mod run;

pub use catalog::{cmd_list, cmd_show};
pub use config::{cmd_config_init, cmd_config_show, load_settings};
pub use run::{cmd_run, RunArgs};
