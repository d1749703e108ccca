pub mod components;
mod styles;

pub use styles::{setup_styles, toast_color, variant_colors};
