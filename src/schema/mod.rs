pub mod options;
pub mod platform;
