//! Dashboard assembly
//!
//! A [`Dashboard`] owns the loaded dataset and the charts that never change
//! after load. The outputs that depend on the country selection are
//! recomputed on demand by [`Dashboard::update`], which is a pure function of
//! the dataset and the selection.

pub mod session;

pub use session::DashboardSession;

use std::time::Instant;

use log::{debug, info};
use serde::Serialize;

use crate::algorithm::{
    CategoryCount, ClassYearCount, CountryYearCount, DiversityPoint, GenderShare, Statistics,
    SunburstBreakdown, TechniqueCount, YearCount, acquisition_trend, animated_class_bar,
    class_distribution, country_distribution, country_universe, donut_breakdown, gender_trend,
    geographic_trend_map, nationality_diversity_trend, statistics, sunburst_breakdown,
};
use crate::collections::ArtworkCollection;
use crate::common::traits::ModelCollection;
use crate::config::DashboardConfig;
use crate::filter::CountrySelection;
use crate::render::{self, ChartSpec};

/// Charts computed once from the full dataset
#[derive(Debug, Clone, Serialize)]
pub struct StaticCharts {
    /// Classifications acquired within the configured year range
    pub class_distribution: Vec<CategoryCount>,
    /// Countries acquired up to the cutoff year, small ones possibly folded
    pub country_distribution: Vec<CategoryCount>,
    /// Per-year counts of the tracked classifications
    pub animated_classes: Vec<ClassYearCount>,
    /// Acquisitions per year, or their running total
    pub acquisition_trend: Vec<YearCount>,
    /// Male and female shares per year
    pub gender_trend: Vec<GenderShare>,
    /// Distinct nationalities per year and cumulatively
    pub nationality_diversity: Vec<DiversityPoint>,
    /// Cumulative acquisitions per country and year
    pub geographic_map: Vec<CountryYearCount>,
}

/// Outputs that follow the country selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredOutputs {
    /// Headline numbers
    pub statistics: Statistics,
    /// Department and classification breakdown
    pub sunburst: SunburstBreakdown,
    /// Painting techniques in label order
    pub donut: Vec<TechniqueCount>,
}

impl FilteredOutputs {
    /// Chart specs of the selection-dependent charts
    #[must_use]
    pub fn charts(&self) -> Vec<(&'static str, ChartSpec)> {
        vec![
            ("sunburst", render::sunburst_chart(&self.sunburst)),
            ("donut", render::donut_chart(&self.donut)),
        ]
    }
}

/// The dataset together with its static charts and selection options
#[derive(Debug)]
pub struct Dashboard {
    dataset: ArtworkCollection,
    config: DashboardConfig,
    static_charts: StaticCharts,
    country_options: Vec<String>,
}

impl Dashboard {
    /// Build a dashboard, computing every static chart once
    #[must_use]
    pub fn new(dataset: ArtworkCollection, config: DashboardConfig) -> Self {
        let start = Instant::now();
        info!("Building dashboard over {} records", dataset.count());
        debug!("{config}");

        let static_charts = StaticCharts {
            class_distribution: class_distribution(
                &dataset,
                config.class_range_start,
                config.class_range_end,
            ),
            country_distribution: country_distribution(
                &dataset,
                config.country_cutoff_year,
                config.group_smallest,
                config.group_method,
            ),
            animated_classes: animated_class_bar(
                &dataset,
                config.animated_classifications.as_slice(),
            ),
            acquisition_trend: acquisition_trend(&dataset, config.cumulative_trend),
            gender_trend: gender_trend(&dataset),
            nationality_diversity: nationality_diversity_trend(&dataset),
            geographic_map: geographic_trend_map(&dataset, &CountrySelection::Unfiltered),
        };
        let country_options = country_universe(&dataset);

        info!(
            "Dashboard ready with {} selectable countries in {:?}",
            country_options.len(),
            start.elapsed()
        );

        Self {
            dataset,
            config,
            static_charts,
            country_options,
        }
    }

    /// Build a dashboard with the default configuration
    #[must_use]
    pub fn with_defaults(dataset: ArtworkCollection) -> Self {
        Self::new(dataset, DashboardConfig::default())
    }

    /// The underlying dataset
    #[must_use]
    pub const fn dataset(&self) -> &ArtworkCollection {
        &self.dataset
    }

    /// The configuration the static charts were computed with
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Aggregates behind the static charts
    #[must_use]
    pub const fn static_charts(&self) -> &StaticCharts {
        &self.static_charts
    }

    /// Countries offered by the selection control
    #[must_use]
    pub fn country_options(&self) -> &[String] {
        &self.country_options
    }

    /// Recompute the selection-dependent outputs
    #[must_use]
    pub fn update(&self, selection: &CountrySelection) -> FilteredOutputs {
        debug!("Recomputing filtered outputs for {selection:?}");
        FilteredOutputs {
            statistics: statistics(&self.dataset, selection),
            sunburst: sunburst_breakdown(&self.dataset, selection),
            donut: donut_breakdown(&self.dataset, selection),
        }
    }

    /// Chart specs of the static charts, keyed by a file-friendly name
    #[must_use]
    pub fn static_chart_specs(&self) -> Vec<(&'static str, ChartSpec)> {
        let charts = &self.static_charts;
        vec![
            (
                "class_distribution",
                render::class_distribution_chart(
                    &charts.class_distribution,
                    self.config.class_range_start,
                    self.config.class_range_end,
                ),
            ),
            (
                "country_distribution",
                render::country_distribution_chart(
                    &charts.country_distribution,
                    self.config.country_cutoff_year,
                ),
            ),
            (
                "animated_classes",
                render::animated_class_bar_chart(&charts.animated_classes),
            ),
            (
                "acquisition_trend",
                render::acquisition_trend_chart(
                    &charts.acquisition_trend,
                    self.config.cumulative_trend,
                ),
            ),
            ("gender_trend", render::gender_trend_chart(&charts.gender_trend)),
            (
                "nationality_diversity",
                render::nationality_diversity_chart(&charts.nationality_diversity),
            ),
            (
                "geographic_map",
                render::geographic_map_chart(&charts.geographic_map),
            ),
        ]
    }
}
