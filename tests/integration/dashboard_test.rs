use std::sync::Arc;
use std::thread;

use serde_json::Value;

use moma_tour::{Dashboard, DashboardConfig, DashboardSession, GroupMethod};

use crate::utils::generate_sample_collection;

#[test]
fn test_static_chart_specs_serialise() -> anyhow::Result<()> {
    let dashboard = Dashboard::with_defaults(generate_sample_collection(500, 41));

    let specs = dashboard.static_chart_specs();
    let titles: Vec<&str> = specs.iter().map(|(_, spec)| spec.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Classes distribution from 1929 to 2020",
            "Countries distribution in 2020",
            "Classification of Acquired Artworks",
            "Total number of art acquired",
            "Gender of Artists Over Time",
            "Diversity of Artists' Origins Over Time",
            "Artworks' Nationality Evolution",
        ]
    );

    for (_, spec) in &specs {
        let value: Value = serde_json::from_str(&spec.to_json()?)?;
        assert!(value["data"].is_array());
    }

    let animated = &specs[2].1;
    assert_eq!(animated.frames.len(), dashboard.dataset().years().len());
    Ok(())
}

#[test]
fn test_config_drives_static_charts() {
    let config = DashboardConfig {
        class_range_start: 1960,
        class_range_end: 1970,
        group_smallest: false,
        group_method: GroupMethod::Median,
        cumulative_trend: false,
        ..Default::default()
    };
    let dashboard = Dashboard::new(generate_sample_collection(500, 42), config);

    let charts = dashboard.static_charts();
    assert!(charts.country_distribution.iter().all(|c| c.category != "Other"));
    assert_eq!(
        charts.acquisition_trend.iter().map(|p| p.count).sum::<usize>(),
        500
    );
    assert_eq!(
        dashboard.static_chart_specs()[0].1.title,
        "Classes distribution from 1960 to 1970"
    );
}

#[test]
fn test_sessions_share_a_dashboard() {
    let dashboard = Arc::new(Dashboard::with_defaults(generate_sample_collection(1_000, 43)));
    let unfiltered = dashboard.update(&moma_tour::CountrySelection::Unfiltered);
    let options = dashboard.country_options().to_vec();
    assert!(!options.is_empty());

    let handles: Vec<_> = options
        .iter()
        .cloned()
        .map(|country| {
            let dashboard = Arc::clone(&dashboard);
            thread::spawn(move || {
                let mut session = DashboardSession::new(dashboard);
                let selected = session.select(Some(std::slice::from_ref(&country)));
                let cleared = session.clear();
                (selected, cleared)
            })
        })
        .collect();

    for handle in handles {
        let (selected, cleared) = handle.join().expect("session thread panicked");
        assert!(selected.statistics.artworks <= unfiltered.statistics.artworks);
        assert!(selected.sunburst.total() <= unfiltered.sunburst.total());
        assert_eq!(cleared, unfiltered);
    }
}

#[test]
fn test_filtered_chart_specs() {
    let dashboard = Dashboard::with_defaults(generate_sample_collection(300, 44));
    let outputs = dashboard.update(&moma_tour::CountrySelection::from_values(["French"]));
    let charts = outputs.charts();
    assert_eq!(charts[0].1.title, "Artworks Classification Arranged by Department");
    assert_eq!(charts[1].1.title, "Most Popular Painting Techniques");
}
