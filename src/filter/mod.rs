//! Record filtering criteria
//!
//! Filters here are plain predicates over [`ArtworkRecord`]; the dataset is
//! small enough to scan and never changes, so no index is kept.

use std::collections::{BTreeSet, HashSet};

use crate::config::{PAINTING_CLASSIFICATIONS, UNKNOWN_MEDIUM};
use crate::models::ArtworkRecord;

/// Defines a criterion for filtering records
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// A filter that can be applied to an artwork record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtworkFilter {
    /// Acquired between two years, both inclusive
    YearRange {
        /// First year (inclusive)
        start: i32,
        /// Last year (inclusive)
        end: i32,
    },
    /// Acquired in or before the given year
    AcquiredBy(i32),
    /// Acquired in exactly the given year
    AcquiredIn(i32),
    /// Artist nationality is one of the given countries
    Countries(HashSet<String>),
    /// Classification is one of the given values
    Classifications(HashSet<String>),
    /// Medium is present and not the "Not known" sentinel
    KnownMedium,
    /// Combined filter that requires all criteria to be met
    All(Vec<ArtworkFilter>),
    /// Combined filter that requires any criterion to be met
    Any(Vec<ArtworkFilter>),
}

impl ArtworkFilter {
    /// Classification restricted to Drawing, Painting and Work on Paper
    #[must_use]
    pub fn painting_like() -> Self {
        Self::Classifications(
            PAINTING_CLASSIFICATIONS
                .iter()
                .map(|class| (*class).to_string())
                .collect(),
        )
    }
}

impl FilterCriteria<ArtworkRecord> for ArtworkFilter {
    fn meets_criteria(&self, record: &ArtworkRecord) -> bool {
        match self {
            Self::YearRange { start, end } => (*start..=*end).contains(&record.date_acquired),
            Self::AcquiredBy(year) => record.date_acquired <= *year,
            Self::AcquiredIn(year) => record.date_acquired == *year,
            Self::Countries(countries) => record
                .country
                .as_ref()
                .is_some_and(|country| countries.contains(country)),
            Self::Classifications(classes) => record
                .classification
                .as_ref()
                .is_some_and(|class| classes.contains(class)),
            Self::KnownMedium => record
                .medium
                .as_deref()
                .is_some_and(|medium| medium != UNKNOWN_MEDIUM),
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(record)),
            Self::Any(filters) => filters.iter().any(|f| f.meets_criteria(record)),
        }
    }
}

/// The state of the country selection control
///
/// An empty selection is the same as no selection at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CountrySelection {
    /// Every record is included
    #[default]
    Unfiltered,
    /// Only records attributed to one of these countries are included
    Filtered(BTreeSet<String>),
}

impl CountrySelection {
    /// Build a selection from the values picked in the control
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let countries: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if countries.is_empty() {
            Self::Unfiltered
        } else {
            Self::Filtered(countries)
        }
    }

    /// Build a selection from an optional control value
    #[must_use]
    pub fn from_option(values: Option<&[String]>) -> Self {
        values.map_or(Self::Unfiltered, |values| {
            Self::from_values(values.iter().cloned())
        })
    }

    /// Whether the selection admits every record
    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        matches!(self, Self::Unfiltered)
    }

    /// The selected countries, if any
    #[must_use]
    pub const fn countries(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Unfiltered => None,
            Self::Filtered(countries) => Some(countries),
        }
    }
}

impl FilterCriteria<ArtworkRecord> for CountrySelection {
    fn meets_criteria(&self, record: &ArtworkRecord) -> bool {
        match self {
            Self::Unfiltered => true,
            Self::Filtered(countries) => record
                .country
                .as_ref()
                .is_some_and(|country| countries.contains(country)),
        }
    }
}
