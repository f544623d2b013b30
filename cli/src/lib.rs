pub mod app;
pub mod args;
pub mod bench;
pub mod colors;
pub mod display;
pub mod generate;
pub mod logging;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::run;
pub use args::Cli;
pub use colors::ColorScheme;
pub use utils::format_number;
