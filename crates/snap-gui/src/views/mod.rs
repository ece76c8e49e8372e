pub mod controls;
pub mod gallery;
pub mod log_panel;
