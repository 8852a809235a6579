//! Multi-format exporters: CSS custom properties, Tailwind config, DTCG
//! JSON.
//!
//! The defining property of every exporter is determinism: for a fixed
//! input, repeated calls produce byte-identical output. That falls out of
//! declared role order, ascending step order, pre-rounded colour values,
//! and never touching the clock.

mod css;
mod dtcg;
mod tailwind;

pub use css::{
    format_rule, generate_css_from_tokens, generate_css_variables, generate_dark_mode_css,
    generate_dark_mode_overrides, merge_light_and_dark_css, CssOptions, DARK_SELECTOR,
};
pub use dtcg::export_to_dtcg;
pub use tailwind::{export_to_tailwind, TailwindFormat, TailwindOptions};
