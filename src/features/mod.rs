pub mod billing;
pub mod files;
