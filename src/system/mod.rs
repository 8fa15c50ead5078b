//! External process collaborators: command execution and server reload.

pub mod command;
pub mod reload;

pub use command::{CommandRunner, TokioCommandRunner};
pub use reload::ReloadOrchestrator;
