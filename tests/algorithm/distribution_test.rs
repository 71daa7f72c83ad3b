use moma_tour::algorithm::{
    animated_class_bar, class_distribution, country_distribution, donut_breakdown,
    sunburst_breakdown,
};
use moma_tour::config::{ANIMATED_CLASSIFICATIONS, OTHER_BUCKET};
use moma_tour::{ArtworkRecord, CountrySelection, GroupMethod};

use crate::utils::{generate_sample_collection, painting};

#[test]
fn test_class_distribution_sums_to_range() {
    let dataset = generate_sample_collection(2_000, 11);
    let counts = class_distribution(&dataset, 1950, 1990);

    let expected = dataset
        .iter()
        .filter(|r| (1950..=1990).contains(&r.date_acquired) && r.classification.is_some())
        .count();
    assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), expected);
    assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn test_country_distribution_grouping_preserves_total() {
    let dataset = generate_sample_collection(2_000, 12);
    let expected = dataset
        .iter()
        .filter(|r| r.date_acquired <= 2000 && r.country.is_some())
        .count();

    for method in [GroupMethod::Mean, GroupMethod::Median] {
        let grouped = country_distribution(&dataset, 2000, true, method);
        assert_eq!(grouped.iter().map(|c| c.count).sum::<usize>(), expected);
        assert_eq!(grouped.last().map(|c| c.category.as_str()), Some(OTHER_BUCKET));
    }

    let ungrouped = country_distribution(&dataset, 2000, false, GroupMethod::Mean);
    assert_eq!(ungrouped.iter().map(|c| c.count).sum::<usize>(), expected);
    assert!(ungrouped.iter().all(|c| c.category != OTHER_BUCKET));
}

#[test]
fn test_country_distribution_mean_threshold() {
    // Counts 6, 3, 1, 1, 1: mean 2.4, so the three singles fold into Other
    let mut records = Vec::new();
    for (country, n) in [("US", 6), ("FR", 3), ("JP", 1), ("DE", 1), ("IT", 1)] {
        records.extend((0..n).map(|_| ArtworkRecord::new(1990).with_country(country)));
    }
    let counts = country_distribution(&records, 2020, true, GroupMethod::Mean);
    let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.category.as_str(), c.count)).collect();
    assert_eq!(pairs, vec![("US", 6), ("FR", 3), ("Other", 3)]);

    // Median is 1: only the singles fold as well
    let counts = country_distribution(&records, 2020, true, GroupMethod::Median);
    let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.category.as_str(), c.count)).collect();
    assert_eq!(pairs, vec![("US", 6), ("FR", 3), ("Other", 3)]);
}

#[test]
fn test_country_distribution_empty_input() {
    let records: Vec<ArtworkRecord> = Vec::new();
    assert!(country_distribution(&records, 2020, true, GroupMethod::Mean).is_empty());
}

#[test]
fn test_animated_bar_covers_every_year_and_class() {
    let dataset = generate_sample_collection(1_000, 13);
    let rows = animated_class_bar(&dataset, &ANIMATED_CLASSIFICATIONS);

    assert_eq!(rows.len(), dataset.years().len() * ANIMATED_CLASSIFICATIONS.len());
    assert!(rows.windows(2).all(|w| w[0].year <= w[1].year));
    for row in rows.iter().filter(|r| r.count == 0) {
        assert_eq!(row.count_log, 0.0);
    }
    let tracked = dataset
        .iter()
        .filter(|r| r.classified_as(&ANIMATED_CLASSIFICATIONS))
        .count();
    assert_eq!(rows.iter().map(|r| r.count).sum::<usize>(), tracked);
}

#[test]
fn test_sunburst_totals() {
    let dataset = generate_sample_collection(1_500, 14);
    let breakdown = sunburst_breakdown(&dataset, &CountrySelection::Unfiltered);

    let expected = dataset
        .iter()
        .filter(|r| r.department.is_some() && r.classification.is_some())
        .count();
    assert_eq!(breakdown.total(), expected);
    assert_eq!(
        breakdown.segments.iter().map(|s| s.count).sum::<usize>(),
        expected
    );

    for department in &breakdown.departments {
        let leaves: usize = breakdown
            .segments
            .iter()
            .filter(|s| s.department == department.category)
            .map(|s| s.count)
            .sum();
        assert_eq!(leaves, department.count);
    }
}

#[test]
fn test_donut_counts_only_painting_like_known_mediums() {
    let mut records = vec![
        painting(2000, "France", "Oil on canvas"),
        painting(2000, "France", "Not known"),
        painting(2000, "Japan", "Ink and wash"),
        ArtworkRecord::new(2000)
            .with_classification("Photograph")
            .with_country("France")
            .with_medium("Gelatin silver print"),
    ];
    records.push(ArtworkRecord::new(2000).with_classification("Work on Paper").with_country("Japan"));

    let donut = donut_breakdown(&records, &CountrySelection::Unfiltered);
    let labels: Vec<(&str, usize)> = donut.iter().map(|t| (t.technique.label(), t.count)).collect();
    assert_eq!(labels, vec![("Mixed", 1), ("Oil", 1)]);

    let japan = donut_breakdown(&records, &CountrySelection::from_values(["Japan"]));
    assert_eq!(japan.iter().map(|t| t.count).sum::<usize>(), 1);
}
