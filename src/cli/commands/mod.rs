//! CLI command implementations

pub mod init;
pub mod register;
pub mod show;
pub mod status;
pub mod transition;
pub mod warranty;
