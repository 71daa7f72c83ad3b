//! The artwork acquisition record

use serde::Deserialize;

use crate::models::types::Gender;

/// One acquired artwork
///
/// Text attributes are `None` when the source cell is missing or blank.
/// `date_acquired` is always present; rows without a usable year are
/// rejected (or skipped) while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkRecord {
    /// Title, not unique across records
    pub title: Option<String>,
    /// Credited artist
    pub artist: Option<String>,
    /// Gender of the credited artist
    pub gender: Option<Gender>,
    /// Attributed nationality of the artist
    pub country: Option<String>,
    /// Year the museum acquired the work
    pub date_acquired: i32,
    /// Classification such as "Painting" or "Photograph"
    pub classification: Option<String>,
    /// Curatorial department
    pub department: Option<String>,
    /// Free-text materials description
    pub medium: Option<String>,
}

impl ArtworkRecord {
    /// Create a record acquired in `year` with every other attribute missing
    #[must_use]
    pub const fn new(year: i32) -> Self {
        Self {
            title: None,
            artist: None,
            gender: None,
            country: None,
            date_acquired: year,
            classification: None,
            department: None,
            medium: None,
        }
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the artist
    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Set the gender
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the country
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the classification
    #[must_use]
    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = Some(classification.into());
        self
    }

    /// Set the department
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Set the medium
    #[must_use]
    pub fn with_medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = Some(medium.into());
        self
    }

    /// Whether the classification is one of `classes`
    #[must_use]
    pub fn classified_as<S: AsRef<str>>(&self, classes: &[S]) -> bool {
        self.classification
            .as_deref()
            .is_some_and(|class| classes.iter().any(|c| c.as_ref() == class))
    }
}

/// A dataset row as it comes out of a record batch, before validation
#[derive(Debug, Clone, Deserialize)]
pub struct RawArtworkRow {
    /// Title column
    #[serde(rename = "Title")]
    pub title: Option<String>,
    /// Artist column
    #[serde(rename = "Artist")]
    pub artist: Option<String>,
    /// Gender column
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
    /// Country column
    #[serde(rename = "Country")]
    pub country: Option<String>,
    /// DateAcquired column, still unparsed
    #[serde(rename = "DateAcquired")]
    pub date_acquired: Option<String>,
    /// Classification column
    #[serde(rename = "Classification")]
    pub classification: Option<String>,
    /// Department column
    #[serde(rename = "Department")]
    pub department: Option<String>,
    /// Medium column
    #[serde(rename = "Medium")]
    pub medium: Option<String>,
}

impl RawArtworkRow {
    /// Validate the row into a record given its parsed acquisition year
    #[must_use]
    pub fn into_record(self, year: i32) -> ArtworkRecord {
        ArtworkRecord {
            title: non_blank(self.title),
            artist: non_blank(self.artist),
            gender: non_blank(self.gender).map(|g| Gender::from(g.as_str())),
            country: non_blank(self.country),
            date_acquired: year,
            classification: non_blank(self.classification),
            department: non_blank(self.department),
            medium: non_blank(self.medium),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
