use moma_tour::algorithm::{
    acquisition_trend, gender_trend, geographic_trend_map, nationality_diversity_trend,
};
use moma_tour::{ArtworkRecord, CountrySelection, Gender};

use crate::utils::generate_sample_collection;

#[test]
fn test_cumulative_trend_is_running_sum() {
    let dataset = generate_sample_collection(1_000, 21);
    let yearly = acquisition_trend(&dataset, false);
    let total = acquisition_trend(&dataset, true);

    assert_eq!(yearly.len(), total.len());
    let mut running = 0;
    for (year, cumulative) in yearly.iter().zip(&total) {
        running += year.count;
        assert_eq!(year.year, cumulative.year);
        assert_eq!(cumulative.count, running);
    }
    assert_eq!(running, dataset.iter().count());
}

#[test]
fn test_gender_shares_add_to_hundred() {
    let dataset = generate_sample_collection(2_000, 22);
    for share in gender_trend(&dataset) {
        if share.male_count + share.female_count == 0 {
            assert_eq!((share.male_pct, share.female_pct), (0.0, 0.0));
        } else {
            assert!((share.male_pct + share.female_pct - 100.0).abs() < 1e-9);
        }
    }
}

#[test]
fn test_gender_trend_ignores_other_and_missing() {
    let records = vec![
        ArtworkRecord::new(1990).with_gender(Gender::Male),
        ArtworkRecord::new(1990).with_gender(Gender::Female),
        ArtworkRecord::new(1990).with_gender(Gender::Female),
        ArtworkRecord::new(1990).with_gender(Gender::Female),
        ArtworkRecord::new(1990).with_gender(Gender::Other),
        ArtworkRecord::new(1991),
    ];
    let shares = gender_trend(&records);
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].male_pct, 25.0);
    assert_eq!(shares[0].female_pct, 75.0);
    assert_eq!(shares[1].year, 1991);
    assert_eq!(shares[1].male_pct, 0.0);
}

#[test]
fn test_diversity_is_monotonic() {
    let dataset = generate_sample_collection(2_000, 23);
    let points = nationality_diversity_trend(&dataset);

    assert!(
        points
            .windows(2)
            .all(|w| w[0].cumulative_countries <= w[1].cumulative_countries)
    );
    assert!(points.iter().all(|p| p.countries <= p.cumulative_countries));
}

#[test]
fn test_geographic_map_forward_fills() {
    let records = vec![
        ArtworkRecord::new(1990).with_country("France"),
        ArtworkRecord::new(1992).with_country("Japan"),
        ArtworkRecord::new(1992).with_country("France"),
        ArtworkRecord::new(1991),
    ];
    let rows = geographic_trend_map(&records, &CountrySelection::Unfiltered);
    let cells: Vec<(i32, &str, usize)> = rows
        .iter()
        .map(|r| (r.year, r.country.as_str(), r.cumulative))
        .collect();
    assert_eq!(
        cells,
        vec![
            (1990, "France", 1),
            (1990, "Japan", 0),
            (1992, "France", 2),
            (1992, "Japan", 1),
        ]
    );
    assert_eq!(rows[1].count_log, 0.0);
    assert!((rows[2].count_log - 2f64.ln()).abs() < 1e-12);
}

#[test]
fn test_geographic_map_cumulative_never_decreases() {
    let dataset = generate_sample_collection(1_500, 24);
    let rows = geographic_trend_map(&dataset, &CountrySelection::Unfiltered);
    let mut last: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    for row in &rows {
        let previous = last.insert(row.country.as_str(), row.cumulative).unwrap_or(0);
        assert!(row.cumulative >= previous);
    }
}
