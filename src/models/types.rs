//! Common domain type definitions

use std::fmt;

use serde::Serialize;

/// Gender of the artist credited for an artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Any other recorded value (non-binary, collectives, ...)
    Other,
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Technique category derived from a free-text medium description
///
/// Variants are declared in alphabetical order of their labels so that the
/// derived `Ord` matches label order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Technique {
    /// Acrylic paint
    Acrylic,
    /// Charcoal
    Charcoal,
    /// Crayon
    Crayon,
    /// Gouache
    Gouache,
    /// Ink
    Ink,
    /// More than one material
    Mixed,
    /// Oil paint
    Oil,
    /// Nothing recognised
    Other,
    /// Paint, dye or pigment not covered by a more specific label
    Paint,
    /// Pastel
    Pastel,
    /// Pencil or graphite pencil
    Pencil,
    /// Tempera
    Tempera,
    /// Watercolour
    Watercolour,
}

impl Technique {
    /// Every label in label order
    pub const ALL: [Self; 13] = [
        Self::Acrylic,
        Self::Charcoal,
        Self::Crayon,
        Self::Gouache,
        Self::Ink,
        Self::Mixed,
        Self::Oil,
        Self::Other,
        Self::Paint,
        Self::Pastel,
        Self::Pencil,
        Self::Tempera,
        Self::Watercolour,
    ];

    /// Display label of the technique
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Acrylic => "Acrylic",
            Self::Charcoal => "Charcoal",
            Self::Crayon => "Crayon",
            Self::Gouache => "Gouache",
            Self::Ink => "Ink",
            Self::Mixed => "Mixed",
            Self::Oil => "Oil",
            Self::Other => "Other",
            Self::Paint => "Paint",
            Self::Pastel => "Pastel",
            Self::Pencil => "Pencil",
            Self::Tempera => "Tempera",
            Self::Watercolour => "Watercolour",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
