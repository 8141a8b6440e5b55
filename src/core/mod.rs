pub mod status;
pub mod template;
pub mod update;
