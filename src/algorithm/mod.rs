//! Aggregation core
//!
//! Pure functions from a record set to chart-ready summary tables. None of
//! them fail: missing values are excluded from the group they would belong
//! to, and empty inputs produce empty (or zero-valued) summaries.

pub mod aggregation;
pub mod statistics;
pub mod technique;

pub use aggregation::distribution::{
    CategoryCount, ClassYearCount, SunburstBreakdown, SunburstSegment, TechniqueCount,
    animated_class_bar, class_distribution, country_distribution, donut_breakdown,
    sunburst_breakdown,
};
pub use aggregation::trends::{
    CountryYearCount, DiversityPoint, GenderShare, YearCount, acquisition_trend,
    gender_trend, geographic_trend_map, nationality_diversity_trend,
};
pub use statistics::{Statistics, country_universe, format_percentage, statistics};
pub use technique::classify_medium;
