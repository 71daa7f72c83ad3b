//! Categorical distributions: counts of records per category

use std::collections::BTreeMap;

use itertools::Itertools;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::algorithm::aggregation::log_count;
use crate::algorithm::technique::classify_medium;
use crate::config::{GroupMethod, OTHER_BUCKET, PAINTING_CLASSIFICATIONS};
use crate::filter::{ArtworkFilter, CountrySelection, FilterCriteria};
use crate::models::{ArtworkRecord, Technique};

/// Number of records in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Category value
    pub category: String,
    /// Number of records
    pub count: usize,
}

/// Count records per key, most frequent first (ties by name)
///
/// Records whose key is missing are not counted.
pub fn count_by<'a, I, F>(records: I, key: F) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a ArtworkRecord>,
    F: Fn(&'a ArtworkRecord) -> Option<&'a str>,
{
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for record in records {
        if let Some(value) = key(record) {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)))
        .collect()
}

/// Classification distribution of works acquired from `start` to `end`, both inclusive
pub fn class_distribution<'a, I>(records: I, start: i32, end: i32) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a ArtworkRecord>,
{
    let range = ArtworkFilter::YearRange { start, end };
    count_by(
        records.into_iter().filter(|r| range.meets_criteria(r)),
        |r| r.classification.as_deref(),
    )
}

/// Country distribution of works acquired up to and including `year`
///
/// With `group_smallest`, every country whose count is at or below the mean
/// (or median) of all country counts is folded into a trailing "Other"
/// bucket. The counts always add up to the number of included records that
/// name a country.
pub fn country_distribution<'a, I>(
    records: I,
    year: i32,
    group_smallest: bool,
    method: GroupMethod,
) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a ArtworkRecord>,
{
    let cutoff = ArtworkFilter::AcquiredBy(year);
    let counts = count_by(
        records.into_iter().filter(|r| cutoff.meets_criteria(r)),
        |r| r.country.as_deref(),
    );

    if !group_smallest || counts.is_empty() {
        return counts;
    }

    let values: Vec<usize> = counts.iter().map(|c| c.count).collect();
    let threshold = match method {
        GroupMethod::Mean => mean(&values),
        GroupMethod::Median => median(&values),
    };

    let (small, mut kept): (Vec<_>, Vec<_>) = counts
        .into_iter()
        .partition(|c| (c.count as f64) <= threshold);

    log::debug!(
        "Folding {} countries at or below {threshold:.2} ({method}) into '{OTHER_BUCKET}'",
        small.len()
    );

    kept.push(CategoryCount {
        category: OTHER_BUCKET.to_string(),
        count: small.iter().map(|c| c.count).sum(),
    });
    kept
}

fn mean(values: &[usize]) -> f64 {
    values.iter().sum::<usize>() as f64 / values.len() as f64
}

fn median(values: &[usize]) -> f64 {
    let sorted: Vec<usize> = values.iter().copied().sorted_unstable().collect();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    }
}

/// Records of one classification acquired in one year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassYearCount {
    /// Acquisition year
    pub year: i32,
    /// Classification
    pub classification: String,
    /// Number of records
    pub count: usize,
    /// Natural log of `count`, zero when `count` is zero
    pub count_log: f64,
}

/// Per-year counts for a fixed list of classifications
///
/// Produces one row for every distinct year in `records` crossed with every
/// entry of `classes`, zero counts included. Rows are ordered by year, then
/// by the order of `classes`.
pub fn animated_class_bar<'a, I, S>(records: I, classes: &[S]) -> Vec<ClassYearCount>
where
    I: IntoIterator<Item = &'a ArtworkRecord>,
    S: AsRef<str> + Sync,
{
    let mut counts: BTreeMap<i32, FxHashMap<&str, usize>> = BTreeMap::new();
    for record in records {
        let per_year = counts.entry(record.date_acquired).or_default();
        if let Some(class) = record.classification.as_deref() {
            *per_year.entry(class).or_insert(0) += 1;
        }
    }

    let years: Vec<(&i32, &FxHashMap<&str, usize>)> = counts.iter().collect();
    years
        .par_iter()
        .flat_map_iter(|(year, per_year)| {
            classes.iter().map(move |class| {
                let count = per_year.get(class.as_ref()).copied().unwrap_or(0);
                ClassYearCount {
                    year: **year,
                    classification: class.as_ref().to_string(),
                    count,
                    count_log: log_count(count),
                }
            })
        })
        .collect()
}

/// Records of one classification within one department
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SunburstSegment {
    /// Department (inner ring)
    pub department: String,
    /// Classification (outer ring)
    pub classification: String,
    /// Number of records
    pub count: usize,
}

/// Two-level Department → Classification breakdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SunburstBreakdown {
    /// Department totals, sorted by department
    pub departments: Vec<CategoryCount>,
    /// Leaf counts, sorted by department then classification
    pub segments: Vec<SunburstSegment>,
}

impl SunburstBreakdown {
    /// Total number of records in the breakdown
    #[must_use]
    pub fn total(&self) -> usize {
        self.departments.iter().map(|d| d.count).sum()
    }
}

/// Department → Classification counts, optionally restricted to a country selection
///
/// Records missing either level are left out.
pub fn sunburst_breakdown<'a, I>(records: I, selection: &CountrySelection) -> SunburstBreakdown
where
    I: IntoIterator<Item = &'a ArtworkRecord>,
{
    let mut leaves: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for record in records.into_iter().filter(|r| selection.meets_criteria(r)) {
        if let (Some(department), Some(class)) = (
            record.department.as_deref(),
            record.classification.as_deref(),
        ) {
            *leaves.entry((department, class)).or_insert(0) += 1;
        }
    }

    let departments = leaves
        .iter()
        .chunk_by(|((department, _), _)| *department)
        .into_iter()
        .map(|(department, group)| CategoryCount {
            category: department.to_string(),
            count: group.map(|(_, count)| *count).sum(),
        })
        .collect();

    let segments = leaves
        .into_iter()
        .map(|((department, classification), count)| SunburstSegment {
            department: department.to_string(),
            classification: classification.to_string(),
            count,
        })
        .collect();

    SunburstBreakdown {
        departments,
        segments,
    }
}

/// Number of painting-like works using one technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechniqueCount {
    /// Technique label
    pub technique: Technique,
    /// Number of records
    pub count: usize,
}

/// Technique counts for Drawing, Painting and Work on Paper records
///
/// Records with a missing medium or the "Not known" sentinel are excluded.
/// Only techniques that occur are returned, in label order.
pub fn donut_breakdown<'a, I>(records: I, selection: &CountrySelection) -> Vec<TechniqueCount>
where
    I: IntoIterator<Item = &'a ArtworkRecord>,
{
    let criteria = ArtworkFilter::All(vec![
        ArtworkFilter::painting_like(),
        ArtworkFilter::KnownMedium,
    ]);

    let mut counts: BTreeMap<Technique, usize> = BTreeMap::new();
    for record in records
        .into_iter()
        .filter(|r| selection.meets_criteria(r) && criteria.meets_criteria(r))
    {
        if let Some(medium) = record.medium.as_deref() {
            *counts.entry(classify_medium(medium)).or_insert(0) += 1;
        }
    }

    log::debug!(
        "Classified {} painting-like works ({} of {})",
        counts.values().sum::<usize>(),
        PAINTING_CLASSIFICATIONS.join(", "),
        selection
            .countries()
            .map_or_else(|| "all countries".to_string(), |c| format!("{} countries", c.len()))
    );

    counts
        .into_iter()
        .map(|(technique, count)| TechniqueCount { technique, count })
        .collect()
}
