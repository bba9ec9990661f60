//! Era domain module: theme catalog, theme context and font capability.

mod catalog;
mod model;
mod theme;

pub use catalog::{DEFAULT_ERA_ID, default_era, era_or_default, era_themes, find_era};
pub use model::{EraColors, EraTheme};
pub use theme::{
    CSS_VAR_ACCENT, CSS_VAR_FONT, CSS_VAR_PRIMARY, CSS_VAR_SECONDARY, FontProvider, ThemeContext,
};
