//! Subcommands of the `twenty-questions` binary

pub mod init;
pub mod play;
pub mod scores;
pub mod show;
pub mod validate;
