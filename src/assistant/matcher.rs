use crate::assistant::catalog::CatalogEntry;
use crate::models::Property;

/// What the assistant says back, possibly alongside a project card.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// The sentence shown in the conversation.
    pub text: String,
    /// Card payload when a project was recognized.
    pub card: Option<CatalogEntry>,
}

/// Tokens that trigger the greeting fallback when no project matched.
const GREETING_TOKENS: [&str; 2] = ["hello", "hi"];

const GREETING_REPLY: &str = "Hello! I am Vision AI. Ask me about properties in Pune/Mumbai like Rohan Abhilasha, Pride World City, Blue Ridge, or Godrej Greens.";

const GENERIC_REPLY: &str = "I can help with property details, eco scores, or booking site visits. Try asking about a specific project like ‘Pride World City’.";

/// Answer one user utterance against the catalog.
///
/// The input is lowercased once, then entries are scanned in catalog order
/// and the first entry with any keyword contained in the input wins, no
/// matter where in the input a later entry's keyword appears. With no
/// project hit, inputs containing "hello" or "hi" get the greeting and
/// everything else gets the generic hint.
pub fn match_input(input: &str, catalog: &[CatalogEntry]) -> Reply {
    let normalized = input.to_lowercase();

    for entry in catalog {
        let hit = entry
            .keywords
            .iter()
            .any(|keyword| normalized.contains(keyword.as_str()));
        if hit {
            return Reply {
                text: format!("Here are the details for {}:", entry.name),
                card: Some(entry.clone()),
            };
        }
    }

    if GREETING_TOKENS
        .iter()
        .any(|token| normalized.contains(token))
    {
        return Reply {
            text: GREETING_REPLY.to_string(),
            card: None,
        };
    }

    Reply {
        text: GENERIC_REPLY.to_string(),
        card: None,
    }
}

/// Find the backend property a catalog card corresponds to.
///
/// Probes with the entry's first two keywords: the earliest property whose
/// lowercased title contains either probe wins. `None` means the snapshot
/// holds no matching property and the booking has to go through the manual
/// page instead.
pub fn resolve_booking_target<'a>(
    entry: &CatalogEntry,
    properties: &'a [Property],
) -> Option<&'a Property> {
    let probes: Vec<&str> = entry.keywords.iter().take(2).map(String::as_str).collect();

    properties.iter().find(|property| {
        let title = property.title.to_lowercase();
        probes.iter().any(|probe| title.contains(probe))
    })
}

/// Message shown when a card cannot be tied back to a backend property.
pub fn manual_fallback_message(entry: &CatalogEntry) -> String {
    format!(
        "Could not auto-detect Property ID for {}. Please visit the detailed property page to book.",
        entry.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::catalog::promoted_catalog;
    use serde_json::json;

    fn property(id: &str, title: &str) -> Property {
        serde_json::from_value(json!({
            "id": id,
            "title": title,
            "price": 5_000_000.0,
        }))
        .expect("property fixture")
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let reply = match_input("Tell me about GODREJ Greens", &promoted_catalog());
        assert_eq!(reply.text, "Here are the details for Godrej Greens:");
        let card = reply.card.expect("card");
        assert_eq!(card.name, "Godrej Greens");
        assert_eq!(card.eco_score, 94);
    }

    #[test]
    fn test_catalog_order_breaks_ties_not_input_order() {
        // "godrej" comes first in the sentence, but Pride World City sits
        // earlier in the catalog and takes the tie.
        let reply = match_input("godrej vs pride, which is better?", &promoted_catalog());
        let card = reply.card.expect("card");
        assert_eq!(card.name, "Pride World City – Kingsbury");
    }

    #[test]
    fn test_greeting_answers_hello() {
        let reply = match_input("Hello there!", &promoted_catalog());
        assert!(reply.card.is_none());
        assert_eq!(
            reply.text,
            "Hello! I am Vision AI. Ask me about properties in Pune/Mumbai like Rohan Abhilasha, Pride World City, Blue Ridge, or Godrej Greens."
        );
    }

    #[test]
    fn test_greeting_token_matches_inside_words() {
        // "this" contains "hi", and the check is substring based.
        let reply = match_input("is this good", &promoted_catalog());
        assert!(reply.card.is_none());
        assert!(reply.text.starts_with("Hello! I am Vision AI."));
    }

    #[test]
    fn test_unrecognized_input_gets_generic_hint() {
        let reply = match_input("what can you do", &promoted_catalog());
        assert!(reply.card.is_none());
        assert_eq!(
            reply.text,
            "I can help with property details, eco scores, or booking site visits. Try asking about a specific project like ‘Pride World City’."
        );
    }

    #[test]
    fn test_project_match_wins_over_greeting() {
        let reply = match_input("hi, show me blue ridge", &promoted_catalog());
        let card = reply.card.expect("card");
        assert_eq!(card.name, "Blue Ridge – The Lofts");
    }

    #[test]
    fn test_resolution_via_first_keyword() {
        let catalog = promoted_catalog();
        let godrej = &catalog[2];
        let properties = vec![
            property("p1", "Skyline Towers"),
            property("p9", "Godrej Greens"),
        ];

        let target = resolve_booking_target(godrej, &properties).expect("target");
        assert_eq!(target.id, "p9");
    }

    #[test]
    fn test_resolution_via_second_keyword() {
        let catalog = promoted_catalog();
        let godrej = &catalog[2];
        let properties = vec![property("p4", "Emerald Greens Residency")];

        let target = resolve_booking_target(godrej, &properties).expect("target");
        assert_eq!(target.id, "p4");
    }

    #[test]
    fn test_third_keyword_does_not_resolve() {
        let catalog = promoted_catalog();
        let godrej = &catalog[2];
        // "undri" is the third keyword and never probed.
        let properties = vec![property("p7", "Undri Heights")];

        assert!(resolve_booking_target(godrej, &properties).is_none());
    }

    #[test]
    fn test_earliest_titled_property_wins_resolution() {
        let catalog = promoted_catalog();
        let pride = &catalog[0];
        let properties = vec![
            property("p2", "Pride Panorama"),
            property("p5", "Pride World City Phase 3"),
        ];

        let target = resolve_booking_target(pride, &properties).expect("target");
        assert_eq!(target.id, "p2");
    }

    #[test]
    fn test_manual_fallback_names_the_project() {
        let catalog = promoted_catalog();
        assert_eq!(
            manual_fallback_message(&catalog[4]),
            "Could not auto-detect Property ID for Oberoi Splendor Grande. Please visit the detailed property page to book."
        );
    }
}
