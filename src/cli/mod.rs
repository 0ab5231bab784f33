pub mod args;
pub mod commands;
pub mod interactive;
pub mod session;

pub use args::{Cli, Commands};
pub use commands::run;
pub use interactive::run_interactive;
pub use session::Session;
