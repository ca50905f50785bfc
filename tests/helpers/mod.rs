pub mod factories;
pub mod factory;
pub mod log_capture;
