//! Configuration for the dashboard and the dataset loader.

use std::fmt;
use std::str::FromStr;

/// Classifications shown in the animated per-year bar chart
pub const ANIMATED_CLASSIFICATIONS: [&str; 8] = [
    "Architecture",
    "Design",
    "Drawing",
    "Illustrated Book",
    "Painting",
    "Photograph",
    "Print",
    "Sculpture",
];

/// Classifications that count as painting-like works
pub const PAINTING_CLASSIFICATIONS: [&str; 3] = ["Drawing", "Painting", "Work on Paper"];

/// Medium value recorded when the materials are unknown
pub const UNKNOWN_MEDIUM: &str = "Not known";

/// Label of the synthetic bucket small countries are folded into
pub const OTHER_BUCKET: &str = "Other";

/// Statistic used as the threshold when grouping small countries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupMethod {
    /// Arithmetic mean of all country counts
    #[default]
    Mean,
    /// Median of all country counts
    Median,
}

impl FromStr for GroupMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "median" => Ok(Self::Median),
            other => Err(format!("Unknown group method: {other}")),
        }
    }
}

impl fmt::Display for GroupMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mean => write!(f, "mean"),
            Self::Median => write!(f, "median"),
        }
    }
}

/// Parameters of the charts that are computed once at load time
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// First year of the classification distribution (inclusive)
    pub class_range_start: i32,
    /// Last year of the classification distribution (inclusive)
    pub class_range_end: i32,
    /// Acquisitions up to and including this year feed the country distribution
    pub country_cutoff_year: i32,
    /// Whether to fold small countries into the "Other" bucket
    pub group_smallest: bool,
    /// Threshold statistic for folding small countries
    pub group_method: GroupMethod,
    /// Whether the acquisition trend shows the running total
    pub cumulative_trend: bool,
    /// Classifications tracked by the animated bar chart
    pub animated_classifications: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            class_range_start: 1929,
            class_range_end: 2020,
            country_cutoff_year: 2020,
            group_smallest: true,
            group_method: GroupMethod::Mean,
            cumulative_trend: true,
            animated_classifications: ANIMATED_CLASSIFICATIONS
                .iter()
                .map(|class| (*class).to_string())
                .collect(),
        }
    }
}

impl fmt::Display for DashboardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dashboard Configuration:")?;
        writeln!(
            f,
            "  Classification Range: {}-{}",
            self.class_range_start, self.class_range_end
        )?;
        writeln!(f, "  Country Cutoff Year: {}", self.country_cutoff_year)?;
        if self.group_smallest {
            writeln!(f, "  Group Small Countries: by {}", self.group_method)?;
        } else {
            writeln!(f, "  Group Small Countries: no")?;
        }
        writeln!(f, "  Cumulative Trend: {}", self.cumulative_trend)?;
        writeln!(
            f,
            "  Animated Classifications: {}",
            self.animated_classifications.join(", ")
        )
    }
}

/// Configuration for reading the dataset
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Number of rows per decoded batch
    pub batch_size: usize,
    /// Whether CSV sources start with a header row
    pub has_header: bool,
    /// CSV field delimiter
    pub delimiter: u8,
    /// Skip rows whose acquisition year cannot be parsed instead of failing
    pub skip_invalid_rows: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            batch_size: 8192,
            has_header: true,
            delimiter: b',',
            skip_invalid_rows: false,
        }
    }
}
