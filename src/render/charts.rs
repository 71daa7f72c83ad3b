//! One rendering adapter per dashboard chart

use itertools::Itertools;
use serde_json::{Value, json};

use crate::algorithm::{
    CategoryCount, ClassYearCount, CountryYearCount, DiversityPoint, GenderShare,
    SunburstBreakdown, TechniqueCount, YearCount,
};
use crate::render::palette::{
    BAR_COLOR, FEMALE_COLOR, MALE_COLOR, MAP_SCALE, NATIONALITY_COLORS, SUNBURST_COLOR,
    technique_color,
};
use crate::render::{ChartSpec, Frame};

fn titled(text: &str) -> Value {
    json!({ "text": text, "x": 0.05, "y": 0.95 })
}

fn legend() -> Value {
    json!({
        "orientation": "v",
        "yanchor": "top",
        "y": 0.95,
        "xanchor": "left",
        "x": 0.02,
        "font": { "family": "Arial", "size": 12 },
        "bordercolor": "white",
        "borderwidth": 1,
        "itemsizing": "trace"
    })
}

fn category_bar(counts: &[CategoryCount], title: String, axis: &str) -> ChartSpec {
    let trace = json!({
        "type": "bar",
        "x": counts.iter().map(|c| c.category.as_str()).collect::<Vec<_>>(),
        "y": counts.iter().map(|c| c.count).collect::<Vec<_>>(),
    });
    let layout = json!({
        "title": { "text": title },
        "showlegend": false,
        "xaxis": { "title": axis },
        "yaxis": { "title": "count" },
    });
    ChartSpec::new(title, layout).with_trace(trace)
}

/// Bar chart of the classification distribution
#[must_use]
pub fn class_distribution_chart(counts: &[CategoryCount], start: i32, end: i32) -> ChartSpec {
    category_bar(
        counts,
        format!("Classes distribution from {start} to {end}"),
        "classes",
    )
}

/// Bar chart of the country distribution
#[must_use]
pub fn country_distribution_chart(counts: &[CategoryCount], year: i32) -> ChartSpec {
    category_bar(counts, format!("Countries distribution in {year}"), "countries")
}

/// Animated bar chart, one frame per year, bar height on a log scale
#[must_use]
pub fn animated_class_bar_chart(rows: &[ClassYearCount]) -> ChartSpec {
    let max_log = rows.iter().map(|r| r.count_log).fold(0.0, f64::max);

    let frames = rows
        .iter()
        .chunk_by(|row| row.year)
        .into_iter()
        .map(|(year, group)| {
            let group: Vec<&ClassYearCount> = group.collect();
            Frame {
                name: year.to_string(),
                data: vec![json!({
                    "type": "bar",
                    "x": group.iter().map(|r| r.classification.as_str()).collect::<Vec<_>>(),
                    "y": group.iter().map(|r| r.count_log).collect::<Vec<_>>(),
                    "customdata": group.iter().map(|r| r.count).collect::<Vec<_>>(),
                    "marker": { "color": BAR_COLOR },
                    "hovertemplate": "Number of artworks=%{customdata}<extra></extra>",
                })],
            }
        })
        .collect();

    let title = "Classification of Acquired Artworks";
    let layout = json!({
        "title": titled(title),
        "template": "ggplot2",
        "uniformtext": { "minsize": 8, "mode": "hide" },
        "xaxis": { "title": "Classification" },
        "yaxis": { "title": "Number of Artworks (log)", "range": [0.1, max_log] },
    });
    ChartSpec::new(title, layout).with_frames(frames)
}

/// Line chart of acquisitions per year, or of their running total
#[must_use]
pub fn acquisition_trend_chart(points: &[YearCount], total: bool) -> ChartSpec {
    let title = if total {
        "Total number of art acquired"
    } else {
        "Arts acquired"
    };
    let trace = json!({
        "type": "scatter",
        "mode": "lines",
        "x": points.iter().map(|p| p.year).collect::<Vec<_>>(),
        "y": points.iter().map(|p| p.count).collect::<Vec<_>>(),
    });
    let layout = json!({
        "title": { "text": title },
        "xaxis": { "title": "Year" },
        "yaxis": { "title": "Arts" },
    });
    ChartSpec::new(title, layout).with_trace(trace)
}

/// Stacked area chart of male and female shares per year
#[must_use]
pub fn gender_trend_chart(shares: &[GenderShare]) -> ChartSpec {
    let years: Vec<i32> = shares.iter().map(|s| s.year).collect();
    let area = |name: &str, color: &str, values: Vec<f64>| {
        json!({
            "type": "scatter",
            "name": name,
            "mode": "lines",
            "stackgroup": "one",
            "x": years,
            "y": values,
            "fillcolor": color,
            "line": { "width": 0.5, "color": color },
            "hovertemplate": "Year=%{x}<br>Percentage=%{y:.2f}%",
        })
    };

    let title = "Gender of Artists Over Time";
    let layout = json!({
        "title": titled(title),
        "showlegend": true,
        "legend": legend(),
        "template": "simple_white",
        "xaxis": { "type": "linear", "title": "Year Acquired" },
        "yaxis": {
            "type": "linear",
            "range": [1, 100],
            "ticksuffix": "%",
            "title": "Percentage of Artworks Acquired"
        },
    });
    ChartSpec::new(title, layout)
        .with_trace(area(
            "Female",
            FEMALE_COLOR,
            shares.iter().map(|s| s.female_pct).collect(),
        ))
        .with_trace(area(
            "Male",
            MALE_COLOR,
            shares.iter().map(|s| s.male_pct).collect(),
        ))
}

/// Line chart of per-year and cumulative distinct nationalities
#[must_use]
pub fn nationality_diversity_chart(points: &[DiversityPoint]) -> ChartSpec {
    let years: Vec<i32> = points.iter().map(|p| p.year).collect();
    let line = |name: &str, color: &str, values: Vec<usize>| {
        json!({
            "type": "scatter",
            "mode": "lines",
            "name": name,
            "x": years,
            "y": values,
            "line": { "width": 3, "color": color },
            "hovertemplate": "%{y}<extra></extra>",
        })
    };

    let title = "Diversity of Artists' Origins Over Time";
    let layout = json!({
        "title": titled(title),
        "template": "ggplot2",
        "hovermode": "x",
        "legend": legend(),
        "xaxis": { "title": "Year Artworks were Acquired" },
        "yaxis": { "title": "Number of Nationalities" },
    });
    ChartSpec::new(title, layout)
        .with_trace(line(
            "Different nationalities by year",
            NATIONALITY_COLORS[0],
            points.iter().map(|p| p.countries).collect(),
        ))
        .with_trace(line(
            "Different nationalities until that year",
            NATIONALITY_COLORS[1],
            points.iter().map(|p| p.cumulative_countries).collect(),
        ))
}

/// Animated choropleth of cumulative acquisitions per country
#[must_use]
pub fn geographic_map_chart(rows: &[CountryYearCount]) -> ChartSpec {
    let max_log = rows.iter().map(|r| r.count_log).fold(0.0, f64::max);
    let scale: Vec<(f64, &str)> = MAP_SCALE
        .iter()
        .enumerate()
        .map(|(i, color)| (i as f64 / (MAP_SCALE.len() - 1) as f64, *color))
        .collect();

    let frames = rows
        .iter()
        .chunk_by(|row| row.year)
        .into_iter()
        .map(|(year, group)| {
            let group: Vec<&CountryYearCount> = group.collect();
            Frame {
                name: year.to_string(),
                data: vec![json!({
                    "type": "choropleth",
                    "locationmode": "country names",
                    "locations": group.iter().map(|r| r.country.as_str()).collect::<Vec<_>>(),
                    "z": group.iter().map(|r| r.count_log).collect::<Vec<_>>(),
                    "customdata": group.iter().map(|r| r.cumulative).collect::<Vec<_>>(),
                    "zmin": 0.0,
                    "zmax": max_log,
                    "colorscale": scale,
                    "colorbar": { "title": "Acquired<br>Artworks (log)" },
                    "hovertemplate": "%{location}<br>Acquired Artworks=%{customdata}<extra></extra>",
                })],
            }
        })
        .collect();

    let title = "Artworks' Nationality Evolution";
    let layout = json!({
        "title": { "text": title, "x": 0.1, "y": 0.95, "font": { "color": "black" } },
    });
    ChartSpec::new(title, layout).with_frames(frames)
}

/// Sunburst of departments and their classifications
#[must_use]
pub fn sunburst_chart(breakdown: &SunburstBreakdown) -> ChartSpec {
    let mut ids = Vec::new();
    let mut labels = Vec::new();
    let mut parents = Vec::new();
    let mut values = Vec::new();

    for department in &breakdown.departments {
        ids.push(department.category.clone());
        labels.push(department.category.clone());
        parents.push(String::new());
        values.push(department.count);
    }
    for segment in &breakdown.segments {
        ids.push(format!("{}/{}", segment.department, segment.classification));
        labels.push(segment.classification.clone());
        parents.push(segment.department.clone());
        values.push(segment.count);
    }

    let trace = json!({
        "type": "sunburst",
        "ids": ids,
        "labels": labels,
        "parents": parents,
        "values": values,
        "branchvalues": "total",
        "marker": { "colors": vec![SUNBURST_COLOR; values.len()] },
        "hovertemplate": "Number of artworks=%{value}",
    });

    let title = "Artworks Classification Arranged by Department";
    let layout = json!({
        "title": { "text": title, "font": { "color": "black" } },
    });
    ChartSpec::new(title, layout).with_trace(trace)
}

/// Donut of painting techniques
#[must_use]
pub fn donut_chart(counts: &[TechniqueCount]) -> ChartSpec {
    let trace = json!({
        "type": "pie",
        "hole": 0.88,
        "labels": counts.iter().map(|c| c.technique.label()).collect::<Vec<_>>(),
        "values": counts.iter().map(|c| c.count).collect::<Vec<_>>(),
        "marker": {
            "colors": counts.iter().map(|c| technique_color(c.technique)).collect::<Vec<_>>(),
            "line": { "color": "#ffffff", "width": 1 }
        },
        "hovertemplate": "%{label}<br>Number of artworks=%{value}<extra></extra>",
    });

    let title = "Most Popular Painting Techniques";
    let layout = json!({
        "title": { "text": title, "font": { "color": "black" } },
        "showlegend": true,
        "annotations": [{
            "text": "Techniques<br>used<br>by artists",
            "x": 0.5,
            "y": 0.5,
            "font": { "size": 20 },
            "showarrow": false
        }],
    });
    ChartSpec::new(title, layout).with_trace(trace)
}
