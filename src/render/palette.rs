//! Colours used by the dashboard charts

use crate::models::Technique;

/// Single-series bar colour
pub const BAR_COLOR: &str = "#3DCCC0";

/// Sunburst colour
pub const SUNBURST_COLOR: &str = "#4a4bc7";

/// Female area fill
pub const FEMALE_COLOR: &str = "rgb(111, 231, 219)";

/// Male area fill
pub const MALE_COLOR: &str = "rgb(74, 75, 199)";

/// Per-year and cumulative nationality lines
pub const NATIONALITY_COLORS: [&str; 2] = ["#9acfbf", "#3eceaf"];

/// Continuous scale of the acquisitions map, light to dark
pub const MAP_SCALE: [&str; 7] = [
    "#e8e6ff", "#dcd9ff", "#b2b0ff", "#8889e0", "#6063b6", "#4a4bc7", "#33357f",
];

/// Donut slice colour for a technique
#[must_use]
pub const fn technique_color(technique: Technique) -> &'static str {
    match technique {
        Technique::Acrylic => "#516CCC",
        Technique::Charcoal => "#7799E0",
        Technique::Crayon => "#6084B6",
        Technique::Gouache => "#82BCFA",
        Technique::Ink => "#3DCCC0",
        Technique::Mixed => "#00ae91",
        Technique::Oil => "#00C2B2",
        Technique::Other => "#63E6E3",
        Technique::Paint => "#8DD8EB",
        Technique::Pastel => "#4A4BC7",
        Technique::Pencil => "#81D7CF",
        Technique::Tempera => "#7087CF",
        Technique::Watercolour => "#7DADE6",
    }
}
