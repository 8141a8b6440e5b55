pub mod config;
pub mod init;
pub mod show;
pub mod update;
