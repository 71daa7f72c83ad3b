//! Technique classification of free-text medium descriptions
//!
//! Rules are tried top to bottom and the first match wins, so their order is
//! part of the behaviour. The leading `"and"` rule is matched against the
//! raw text while every other rule sees the lower-cased text: "Sand and
//! stone" is Mixed but "AND ink" is Ink.

use crate::models::Technique;

/// Keyword rules applied to the lower-cased medium, in priority order
const RULES: [(&str, Technique); 15] = [
    ("mixed", Technique::Mixed),
    ("oil", Technique::Oil),
    ("charcoal", Technique::Charcoal),
    ("acrylic", Technique::Acrylic),
    ("tempera", Technique::Tempera),
    ("pencil", Technique::Pencil),
    ("ink", Technique::Ink),
    ("watercolour", Technique::Watercolour),
    ("watercolor", Technique::Watercolour),
    ("crayon", Technique::Crayon),
    ("gouache", Technique::Gouache),
    ("paint", Technique::Paint),
    ("dye", Technique::Paint),
    ("pigment", Technique::Paint),
    ("pastel", Technique::Pastel),
];

/// Classify a medium description into a technique label
///
/// Never fails; empty or unrecognised text is [`Technique::Other`].
#[must_use]
pub fn classify_medium(medium: &str) -> Technique {
    // Case-sensitive on purpose, see module docs
    if medium.contains("and") {
        return Technique::Mixed;
    }

    let lowered = medium.to_lowercase();
    RULES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map_or(Technique::Other, |(_, technique)| *technique)
}
