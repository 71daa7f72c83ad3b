//! Per-session selection state

use std::sync::Arc;

use log::debug;

use crate::dashboard::{Dashboard, FilteredOutputs};
use crate::filter::CountrySelection;

/// One viewer's country selection over a shared dashboard
///
/// Sessions never mutate the dashboard; any number of them may share one.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    dashboard: Arc<Dashboard>,
    selection: CountrySelection,
}

impl DashboardSession {
    /// Start an unfiltered session
    #[must_use]
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self {
            dashboard,
            selection: CountrySelection::Unfiltered,
        }
    }

    /// The current selection
    #[must_use]
    pub const fn selection(&self) -> &CountrySelection {
        &self.selection
    }

    /// The shared dashboard
    #[must_use]
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Apply the value of the selection control and recompute the outputs
    ///
    /// `None` and an empty slice both clear the filter.
    pub fn select(&mut self, values: Option<&[String]>) -> FilteredOutputs {
        self.selection = CountrySelection::from_option(values);
        debug!("Session selection changed to {:?}", self.selection);
        self.outputs()
    }

    /// Clear the selection
    pub fn clear(&mut self) -> FilteredOutputs {
        self.select(None)
    }

    /// Outputs for the current selection
    #[must_use]
    pub fn outputs(&self) -> FilteredOutputs {
        self.dashboard.update(&self.selection)
    }
}
