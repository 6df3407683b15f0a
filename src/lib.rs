#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod layout_dump;
pub mod log;
pub mod markup;
pub mod render;
pub mod theme;
pub mod transform;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, RenderOptions, WallConfig};
pub use error::WallError;
pub use layout::{TableLayout, compute_layout};
pub use render::{emit_all, output_file_name, render_svg, render_table};
pub use theme::Theme;
