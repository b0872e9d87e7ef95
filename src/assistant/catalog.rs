use serde::{Deserialize, Serialize};

/// A promoted project the assistant can present without touching the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name of the project.
    pub name: String,
    /// Area and city, as shown on the card.
    pub location: String,
    /// Pricing blurb, e.g. "Starting ₹65 Lakhs".
    pub price_label: String,
    /// Unit configurations on offer.
    pub config: String,
    /// Sustainability score out of 100.
    pub eco_score: u32,
    /// One-sentence pitch shown on the card.
    pub rationale: String,
    /// Lowercased trigger words. Order matters: the first two double as the
    /// title probes when resolving a backend property id.
    pub keywords: Vec<String>,
}

/// The hand-picked projects the assistant promotes, in presentation order.
/// Earlier entries win keyword ties, so the flagship projects come first.
pub fn promoted_catalog() -> Vec<CatalogEntry> {
    vec![
        entry(
            "Pride World City – Kingsbury",
            "Lohegaon, Pune",
            "Starting ₹65 Lakhs",
            "2 & 3 BHK",
            88,
            "Integrated township with excellent airport and IT-hub connectivity.",
            &["pride", "world", "city", "kingsbury", "lohegaon"],
        ),
        entry(
            "Rohan Abhilasha",
            "Wagholi, Pune",
            "Starting ₹55 Lakhs",
            "1, 2 & 3 BHK",
            90,
            "Designed for ventilation and light. Close to Kharadi IT Park.",
            &["rohan", "abhilasha", "wagholi"],
        ),
        entry(
            "Godrej Greens",
            "Undri, Pune",
            "Starting ₹48 Lakhs",
            "2 & 3 BHK",
            94,
            "Nature-inspired living with a central forest park and gold certification.",
            &["godrej", "greens", "undri"],
        ),
        entry(
            "Blue Ridge – The Lofts",
            "Hinjawadi Phase 1, Pune",
            "Starting ₹72 Lakhs",
            "1 & 2 BHK Studio",
            82,
            "Walk-to-work lifestyle inside the IT Park with golf course views.",
            &["blue", "ridge", "lofts", "hinjawadi"],
        ),
        entry(
            "Oberoi Splendor Grande",
            "Andheri East, Mumbai",
            "Starting ₹3.5 Cr",
            "3 & 4 BHK",
            75,
            "Ultra-luxury expansive apartments with panoramic city views.",
            &["oberoi", "splendor", "grande", "andheri", "mumbai"],
        ),
    ]
}

fn entry(
    name: &str,
    location: &str,
    price_label: &str,
    config: &str,
    eco_score: u32,
    rationale: &str,
    keywords: &[&str],
) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        location: location.to_string(),
        price_label: price_label.to_string(),
        config: config.to_string(),
        eco_score,
        rationale: rationale.to_string(),
        keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keywords_are_lowercase() {
        for entry in promoted_catalog() {
            for keyword in &entry.keywords {
                assert_eq!(keyword, &keyword.to_lowercase(), "in {}", entry.name);
            }
        }
    }

    #[test]
    fn test_every_entry_carries_resolution_probes() {
        for entry in promoted_catalog() {
            assert!(entry.keywords.len() >= 2, "{} needs two probes", entry.name);
        }
    }
}
