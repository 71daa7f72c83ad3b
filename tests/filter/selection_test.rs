use std::collections::HashSet;

use moma_tour::common::traits::ModelCollection;
use moma_tour::{ArtworkCollection, ArtworkFilter, ArtworkRecord, CountrySelection, FilterCriteria};

use crate::utils::{end_to_end_records, painting, sample_record};

fn collection() -> ArtworkCollection {
    ArtworkCollection::from_records(vec![
        painting(1990, "France", "Oil"),
        painting(2005, "Japan", "Ink"),
        sample_record(2010, "Ann", "France"),
        ArtworkRecord::new(2015).with_classification("Drawing"),
    ])
}

#[test]
fn test_selection_normalisation() {
    let empty: Vec<String> = Vec::new();
    assert!(CountrySelection::from_option(None).is_unfiltered());
    assert!(CountrySelection::from_option(Some(empty.as_slice())).is_unfiltered());
    assert!(CountrySelection::from_values(Vec::<String>::new()).is_unfiltered());

    let picked = vec!["Japan".to_string(), "France".to_string(), "Japan".to_string()];
    let selection = CountrySelection::from_option(Some(picked.as_slice()));
    let countries: Vec<&String> = selection.countries().into_iter().flatten().collect();
    assert_eq!(countries, ["France", "Japan"]);
}

#[test]
fn test_selection_excludes_missing_country() {
    let dataset = collection();
    let france = CountrySelection::from_values(["France"]);
    assert_eq!(dataset.for_selection(&france).len(), 2);
    assert_eq!(dataset.for_selection(&CountrySelection::Unfiltered).len(), 4);
    assert!(!france.meets_criteria(&ArtworkRecord::new(2000)));
}

#[test]
fn test_combined_filters() {
    let dataset = collection();

    let early_paintings = ArtworkFilter::All(vec![
        ArtworkFilter::painting_like(),
        ArtworkFilter::YearRange { start: 1980, end: 2006 },
    ]);
    assert_eq!(dataset.matching(&early_paintings).len(), 2);

    let countries: HashSet<String> = ["Japan".to_string()].into_iter().collect();
    let either = ArtworkFilter::Any(vec![
        ArtworkFilter::Countries(countries),
        ArtworkFilter::AcquiredIn(2015),
    ]);
    assert_eq!(dataset.matching(&either).len(), 2);

    assert_eq!(dataset.matching(&ArtworkFilter::KnownMedium).len(), 3);
}

#[test]
fn test_collection_basics() {
    let dataset = ArtworkCollection::from(end_to_end_records());
    assert_eq!(dataset.count(), 2);
    assert!(!dataset.is_empty());
    assert_eq!(dataset.years(), vec![2000, 2001]);

    let shared = dataset.clone();
    assert_eq!(shared.all().as_ptr(), dataset.all().as_ptr());
}
