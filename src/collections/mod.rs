//! The read-only dataset handle
//!
//! [`ArtworkCollection`] is loaded once and then shared by every dashboard
//! session. Cloning it clones an `Arc`, never the records.

use std::sync::Arc;

use itertools::Itertools;

use crate::common::traits::ModelCollection;
use crate::filter::{CountrySelection, FilterCriteria};
use crate::models::ArtworkRecord;

/// Immutable collection of acquisition records
#[derive(Debug, Clone, Default)]
pub struct ArtworkCollection {
    records: Arc<[ArtworkRecord]>,
}

impl ArtworkCollection {
    /// Create a collection from loaded records
    #[must_use]
    pub fn from_records(records: Vec<ArtworkRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Iterate over every record
    pub fn iter(&self) -> std::slice::Iter<'_, ArtworkRecord> {
        self.records.iter()
    }

    /// Distinct acquisition years in ascending order
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|record| record.date_acquired)
            .sorted_unstable()
            .dedup()
            .collect()
    }

    /// Records meeting the given criteria
    #[must_use]
    pub fn matching<C>(&self, criteria: &C) -> Vec<&ArtworkRecord>
    where
        C: FilterCriteria<ArtworkRecord> + ?Sized,
    {
        self.filter(|record| criteria.meets_criteria(record))
    }

    /// Records admitted by a country selection
    #[must_use]
    pub fn for_selection(&self, selection: &CountrySelection) -> Vec<&ArtworkRecord> {
        if selection.is_unfiltered() {
            return self.records.iter().collect();
        }
        self.matching(selection)
    }
}

impl ModelCollection<ArtworkRecord> for ArtworkCollection {
    fn all(&self) -> &[ArtworkRecord] {
        &self.records
    }
}

impl From<Vec<ArtworkRecord>> for ArtworkCollection {
    fn from(records: Vec<ArtworkRecord>) -> Self {
        Self::from_records(records)
    }
}

impl<'a> IntoIterator for &'a ArtworkCollection {
    type Item = &'a ArtworkRecord;
    type IntoIter = std::slice::Iter<'a, ArtworkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
