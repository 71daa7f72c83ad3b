//! Time series over acquisition years

use std::collections::{BTreeMap, BTreeSet, HashSet};

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::algorithm::aggregation::log_count;
use crate::filter::{CountrySelection, FilterCriteria};
use crate::models::{ArtworkRecord, Gender};

/// Records acquired in one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    /// Acquisition year
    pub year: i32,
    /// Per-year or running count
    pub count: usize,
}

/// Acquisitions per year in ascending year order
///
/// With `total`, each entry holds the running sum over all years up to and
/// including its own.
pub fn acquisition_trend<'a, I>(records: I, total: bool) -> Vec<YearCount>
where
    I: IntoIterator<Item = &'a ArtworkRecord>,
{
    let mut per_year: BTreeMap<i32, usize> = BTreeMap::new();
    for record in records {
        *per_year.entry(record.date_acquired).or_insert(0) += 1;
    }

    let mut running = 0;
    per_year
        .into_iter()
        .map(|(year, count)| {
            running += count;
            YearCount {
                year,
                count: if total { running } else { count },
            }
        })
        .collect()
}

/// Male and female share of one year's gendered acquisitions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenderShare {
    /// Acquisition year
    pub year: i32,
    /// Works by male artists
    pub male_count: usize,
    /// Works by female artists
    pub female_count: usize,
    /// Male percentage of `male_count + female_count`
    pub male_pct: f64,
    /// Female percentage of `male_count + female_count`
    pub female_pct: f64,
}

/// Male vs female percentages per year
///
/// Every year present in `records` appears; a year with neither male nor
/// female works has both percentages at zero.
pub fn gender_trend<'a, I>(records: I) -> Vec<GenderShare>
where
    I: IntoIterator<Item = &'a ArtworkRecord>,
{
    let mut per_year: BTreeMap<i32, (usize, usize)> = BTreeMap::new();
    for record in records {
        let entry = per_year.entry(record.date_acquired).or_default();
        match record.gender {
            Some(Gender::Male) => entry.0 += 1,
            Some(Gender::Female) => entry.1 += 1,
            Some(Gender::Other) | None => {}
        }
    }

    per_year
        .into_iter()
        .map(|(year, (male_count, female_count))| {
            let gendered = male_count + female_count;
            let (male_pct, female_pct) = if gendered == 0 {
                (0.0, 0.0)
            } else {
                let male_pct = male_count as f64 * 100.0 / gendered as f64;
                (male_pct, 100.0 - male_pct)
            };
            GenderShare {
                year,
                male_count,
                female_count,
                male_pct,
                female_pct,
            }
        })
        .collect()
}

/// Nationality diversity in one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiversityPoint {
    /// Acquisition year
    pub year: i32,
    /// Distinct countries acquired from in this year
    pub countries: usize,
    /// Distinct countries acquired from in this or any earlier year
    pub cumulative_countries: usize,
}

/// Distinct and cumulative distinct countries per year
///
/// Every year present in `records` appears. The cumulative series grows by
/// exactly the number of countries first seen in each year.
pub fn nationality_diversity_trend<'a, I>(records: I) -> Vec<DiversityPoint>
where
    I: IntoIterator<Item = &'a ArtworkRecord>,
{
    let mut per_year: BTreeMap<i32, BTreeSet<&str>> = BTreeMap::new();
    for record in records {
        let countries = per_year.entry(record.date_acquired).or_default();
        if let Some(country) = record.country.as_deref() {
            countries.insert(country);
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    per_year
        .into_iter()
        .map(|(year, countries)| {
            let distinct = countries.len();
            seen.extend(countries);
            DiversityPoint {
                year,
                countries: distinct,
                cumulative_countries: seen.len(),
            }
        })
        .collect()
}

/// Cumulative acquisitions from one country up to one year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryYearCount {
    /// Acquisition year
    pub year: i32,
    /// Country
    pub country: String,
    /// Works from `country` acquired in `year` or earlier
    pub cumulative: usize,
    /// Natural log of `cumulative`, zero when `cumulative` is zero
    pub count_log: f64,
}

/// Per-country running acquisition totals for the animated map
///
/// The grid spans every year with at least one country-attributed record and
/// every country seen; years without acquisitions from a country carry its
/// previous total forward. Rows are ordered by year, then country.
pub fn geographic_trend_map<'a, I>(records: I, selection: &CountrySelection) -> Vec<CountryYearCount>
where
    I: IntoIterator<Item = &'a ArtworkRecord>,
{
    let mut per_year: BTreeMap<i32, FxHashMap<&str, usize>> = BTreeMap::new();
    let mut countries: BTreeSet<&str> = BTreeSet::new();
    for record in records.into_iter().filter(|r| selection.meets_criteria(r)) {
        if let Some(country) = record.country.as_deref() {
            *per_year
                .entry(record.date_acquired)
                .or_default()
                .entry(country)
                .or_insert(0) += 1;
            countries.insert(country);
        }
    }

    let mut running: Vec<usize> = vec![0; countries.len()];
    let mut rows = Vec::with_capacity(per_year.len() * countries.len());
    for (year, counts) in per_year {
        for (total, country) in running.iter_mut().zip(&countries) {
            *total += counts.get(country).copied().unwrap_or(0);
            rows.push(CountryYearCount {
                year,
                country: (*country).to_string(),
                cumulative: *total,
                count_log: log_count(*total),
            });
        }
    }

    rows
}
