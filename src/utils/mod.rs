mod theme;
mod validation;

pub use theme::Theme;
pub use validation::*;
