pub mod args;
pub mod config;
pub mod prompt;

pub use args::Args;
pub use config::ConfigFile;
pub use prompt::confirm_apply_mode;
