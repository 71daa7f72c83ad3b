use moma_tour::Technique;
use moma_tour::algorithm::classify_medium;

#[test]
fn test_reference_examples() {
    let cases = [
        ("oil and charcoal on canvas", Technique::Mixed),
        ("graphite pencil", Technique::Pencil),
        ("Pigment print", Technique::Paint),
        ("", Technique::Other),
        ("Gelatin silver print", Technique::Other),
        ("Watercolour and pencil", Technique::Mixed),
        ("Gouache on board", Technique::Gouache),
        ("Pastel on paper", Technique::Pastel),
        ("Crayon", Technique::Crayon),
        ("Synthetic polymer paint on canvas", Technique::Paint),
        ("Natural dyes on silk", Technique::Paint),
    ];
    for (medium, expected) in cases {
        assert_eq!(classify_medium(medium), expected, "medium {medium:?}");
    }
}

#[test]
fn test_rule_priority() {
    // "mixed" outranks "oil", "oil" outranks "pencil", "ink" outranks "paint"
    assert_eq!(classify_medium("Mixed media with oil"), Technique::Mixed);
    assert_eq!(classify_medium("Oil, pencil on canvas"), Technique::Oil);
    assert_eq!(classify_medium("Ink, paint"), Technique::Ink);
    assert_eq!(classify_medium("Tempera, pigment"), Technique::Tempera);
}

#[test]
fn test_connective_is_case_sensitive() {
    assert_eq!(classify_medium("Ink AND gouache"), Technique::Ink);
    assert_eq!(classify_medium("Ink and gouache"), Technique::Mixed);
}
