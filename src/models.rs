//! Record Normalization
//!
//! Turns raw SerpAPI result objects into the flat records written to
//! CSV. One raw result maps to exactly one record; deduplication
//! happens later, at write time.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel for fields the provider did not supply
pub const NOT_AVAILABLE: &str = "N/A";

/// Record type assigned to every Google Scholar result
const RESEARCH_PAPER: &str = "Research Paper";

/// Normalized result written to the output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRecord {
    /// Kind of record, always "Research Paper" for Scholar results
    pub record_type: String,
    /// Title of the paper; dedup key at write time
    pub title: String,
    /// Author names joined with ", ", or "N/A" when unknown
    pub authors: String,
    /// Link to the paper
    pub link: String,
}

impl ResearchRecord {
    /// Normalize a single raw Scholar result.
    ///
    /// Authors come from `publication_info.authors[].name`; an absent
    /// or empty author list yields the single value "N/A" rather than
    /// an empty string.
    pub fn from_raw(raw: &Value) -> Self {
        let title = raw
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or(NOT_AVAILABLE)
            .to_string();

        let link = raw
            .get("link")
            .and_then(|v| v.as_str())
            .unwrap_or(NOT_AVAILABLE)
            .to_string();

        let authors = raw
            .get("publication_info")
            .and_then(|p| p.get("authors"))
            .and_then(|a| a.as_array())
            .filter(|list| !list.is_empty())
            .map(|list| {
                list.iter()
                    .map(|author| {
                        author
                            .get("name")
                            .and_then(|n| n.as_str())
                            .unwrap_or(NOT_AVAILABLE)
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            record_type: RESEARCH_PAPER.to_string(),
            title,
            authors,
            link,
        }
    }
}

/// Normalize a batch of raw results, preserving order
pub fn format_results(results: &[Value]) -> Vec<ResearchRecord> {
    results.iter().map(ResearchRecord::from_raw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_author_names_in_order() {
        let raw = json!({
            "title": "Gut flora in health and disease",
            "link": "https://example.org/gut-flora",
            "publication_info": {
                "authors": [
                    {"name": "F. Guarner"},
                    {"name": "J.R. Malagelada"},
                ]
            }
        });

        let record = ResearchRecord::from_raw(&raw);
        assert_eq!(record.authors, "F. Guarner, J.R. Malagelada");
        assert_eq!(record.record_type, "Research Paper");
    }

    #[test]
    fn missing_authors_field_becomes_sentinel() {
        let raw = json!({"title": "Untracked preprint", "link": "https://example.org/x"});
        let record = ResearchRecord::from_raw(&raw);
        assert_eq!(record.authors, "N/A");
    }

    #[test]
    fn empty_author_list_becomes_sentinel() {
        let raw = json!({
            "title": "Anonymous report",
            "publication_info": {"authors": []}
        });
        let record = ResearchRecord::from_raw(&raw);
        assert_eq!(record.authors, "N/A");
    }

    #[test]
    fn author_without_name_becomes_sentinel_entry() {
        let raw = json!({
            "title": "Mixed attribution",
            "publication_info": {
                "authors": [{"name": "A. Turing"}, {"profile": "no-name"}]
            }
        });
        let record = ResearchRecord::from_raw(&raw);
        assert_eq!(record.authors, "A. Turing, N/A");
    }

    #[test]
    fn missing_title_and_link_become_sentinels() {
        let record = ResearchRecord::from_raw(&json!({}));
        assert_eq!(record.title, "N/A");
        assert_eq!(record.link, "N/A");
    }

    #[test]
    fn formats_one_record_per_raw_result() {
        let raws = vec![
            json!({"title": "A"}),
            json!({"title": "A"}),
            json!({"title": "B"}),
        ];
        let records = format_results(&raws);
        // no filtering here, duplicates survive until write time
        assert_eq!(records.len(), 3);
    }
}
