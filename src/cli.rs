//! Command-line arguments of the `moma-tour` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DashboardConfig, GroupMethod, LoaderConfig};
use crate::filter::CountrySelection;

/// Render the MoMA acquisitions dashboard charts as JSON
///
/// Loads a CSV or Parquet dataset (or every such file in a directory),
/// computes every chart and writes one JSON spec per chart, plus the
/// headline statistics and the selectable countries, into OUT_DIR.
///
/// Examples:
///   moma-tour Artworks.csv
///   moma-tour data/ charts French Japanese
///   MOMA_DATA=Artworks.parquet moma-tour --group-method median
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Dataset file or directory of dataset files
    #[arg(env = "MOMA_DATA", default_value = "data.csv", value_name = "DATA")]
    pub data: PathBuf,

    /// Directory the chart specs are written to
    #[arg(default_value = "charts", value_name = "OUT_DIR")]
    pub out_dir: PathBuf,

    /// Countries to filter the statistics, sunburst and donut by
    #[arg(value_name = "COUNTRY")]
    pub countries: Vec<String>,

    /// Statistic used to fold small countries into "Other"
    #[arg(long, default_value = "mean", value_name = "mean|median")]
    pub group_method: GroupMethod,

    /// Keep every country in the country distribution
    #[arg(long)]
    pub no_grouping: bool,

    /// Skip rows without a usable acquisition year instead of failing
    #[arg(long)]
    pub skip_invalid_rows: bool,

    /// Rows per decoded batch
    #[arg(long, default_value_t = 8192, value_name = "ROWS")]
    pub batch_size: usize,
}

impl Args {
    /// Loader settings taken from the arguments
    #[must_use]
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            batch_size: self.batch_size,
            skip_invalid_rows: self.skip_invalid_rows,
            ..Default::default()
        }
    }

    /// Dashboard settings taken from the arguments
    #[must_use]
    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            group_smallest: !self.no_grouping,
            group_method: self.group_method,
            ..Default::default()
        }
    }

    /// The country selection; no countries means no filter
    #[must_use]
    pub fn selection(&self) -> CountrySelection {
        CountrySelection::from_values(self.countries.iter().cloned())
    }
}
