pub mod footer;
pub mod progress_bar;
