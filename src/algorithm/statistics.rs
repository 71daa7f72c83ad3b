//! Headline statistics and the selectable country list

use std::collections::HashSet;

use itertools::Itertools;
use serde::Serialize;

use crate::filter::{ArtworkFilter, CountrySelection, FilterCriteria};
use crate::models::{ArtworkRecord, Gender};

/// Headline numbers shown above the breakdown charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Distinct credited artists
    pub artists: usize,
    /// Distinct titles
    pub artworks: usize,
    /// Share of works by male artists, e.g. "50.0%"
    pub male: String,
    /// Share of works by female artists, e.g. "50.0%"
    pub female: String,
}

/// Format a percentage rounded to two decimals, keeping at least one decimal
///
/// Ties round to even on the exact binary value: `50.0` → `"50.0%"`,
/// `33.3333` → `"33.33%"`, `12.5` → `"12.5%"`, `3.125` → `"3.12%"`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0%")
    } else {
        format!("{trimmed}%")
    }
}

/// Headline statistics, optionally restricted to a country selection
///
/// A missing artist or title counts once, as its own distinct value. Gender
/// shares are taken over records with a recorded gender; a gender with no
/// records, or a selection with no records at all, reads "0.0%".
pub fn statistics<'a, I>(records: I, selection: &CountrySelection) -> Statistics
where
    I: IntoIterator<Item = &'a ArtworkRecord>,
{
    let mut artists: HashSet<Option<&str>> = HashSet::new();
    let mut titles: HashSet<Option<&str>> = HashSet::new();
    let (mut gendered, mut male, mut female) = (0usize, 0usize, 0usize);

    for record in records.into_iter().filter(|r| selection.meets_criteria(r)) {
        artists.insert(record.artist.as_deref());
        titles.insert(record.title.as_deref());
        if let Some(gender) = record.gender {
            gendered += 1;
            match gender {
                Gender::Male => male += 1,
                Gender::Female => female += 1,
                Gender::Other => {}
            }
        }
    }

    let share = |count: usize| {
        if count == 0 {
            format_percentage(0.0)
        } else {
            format_percentage(count as f64 * 100.0 / gendered as f64)
        }
    };

    Statistics {
        artists: artists.len(),
        artworks: titles.len(),
        male: share(male),
        female: share(female),
    }
}

/// Sorted distinct countries of Drawing, Painting and Work on Paper records
///
/// Populates the options of the country selection control.
pub fn country_universe<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ArtworkRecord>,
{
    let painting_like = ArtworkFilter::painting_like();
    records
        .into_iter()
        .filter(|r| painting_like.meets_criteria(r))
        .filter_map(|r| r.country.as_deref())
        .sorted_unstable()
        .dedup()
        .map(str::to_string)
        .collect()
}
