//! Normalized UniProt records

use serde::{Deserialize, Serialize};

/// Placeholder for a citation field the source did not provide
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_FUNCTION: &str = "No function available";
pub const NO_SUBCELLULAR_LOCATION: &str = "No subcellular location available";
pub const NO_DOMAIN: &str = "No domain information available";

/// One UniProtKB entry flattened to the fields the research tools surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinRecord {
    /// Primary accession (e.g. "P01308")
    pub accession: String,
    /// Entry name (e.g. "INS_HUMAN"), empty if absent
    pub entry_id: String,
    /// Recommended full name, empty if unannotated
    pub protein_name: String,
    /// Organism scientific name
    pub organism: String,
    /// FUNCTION comments joined by newline, or [`NO_FUNCTION`]
    pub function: String,
    /// Subcellular locations joined by newline, or [`NO_SUBCELLULAR_LOCATION`]
    pub subcellular_location: String,
    /// DOMAIN comments joined by newline, or [`NO_DOMAIN`]
    pub domains: String,
    /// Amino-acid sequence
    pub sequence: String,
    /// PDB cross-references, passed through as received
    pub structures: Vec<StructureReference>,
    pub citations: Vec<CitationRecord>,
}

/// A literature reference attached to an entry
///
/// Each field defaults on its own; a citation with no DOI still keeps its
/// title, authors, journal and PubMed id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationRecord {
    pub title: String,
    /// Author names joined with ", "
    pub authors: String,
    pub journal: String,
    pub pubmed_id: String,
    pub doi: String,
}

impl Default for CitationRecord {
    fn default() -> Self {
        Self {
            title: NOT_AVAILABLE.to_string(),
            authors: String::new(),
            journal: NOT_AVAILABLE.to_string(),
            pubmed_id: NOT_AVAILABLE.to_string(),
            doi: NOT_AVAILABLE.to_string(),
        }
    }
}

/// A `uniProtKBCrossReferences` item whose database is PDB, unmodified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructureReference(pub serde_json::Value);

impl StructureReference {
    /// The PDB identifier, when the cross-reference carries one
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(serde_json::Value::as_str)
    }
}

/// Result of looking up one accession from a search hit
#[derive(Debug)]
pub struct EntryOutcome {
    pub accession: String,
    pub result: crate::error::Result<ProteinRecord>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_citation_defaults() {
        let citation = CitationRecord::default();
        assert_eq!(citation.title, "N/A");
        assert_eq!(citation.authors, "");
        assert_eq!(citation.journal, "N/A");
        assert_eq!(citation.pubmed_id, "N/A");
        assert_eq!(citation.doi, "N/A");
    }

    #[test]
    fn test_structure_reference_is_transparent() {
        let raw = json!({"database": "PDB", "id": "1A7F", "properties": [{"key": "Method", "value": "NMR"}]});
        let structure = StructureReference(raw.clone());
        assert_eq!(structure.id(), Some("1A7F"));
        assert_eq!(serde_json::to_value(&structure).unwrap(), raw);
    }

    #[test]
    fn test_citation_serializes_in_field_order() {
        let citation = CitationRecord {
            title: "Sequence of human insulin".to_string(),
            ..CitationRecord::default()
        };
        let text = serde_json::to_string(&citation).unwrap();
        assert_eq!(
            text,
            r#"{"title":"Sequence of human insulin","authors":"","journal":"N/A","pubmed_id":"N/A","doi":"N/A"}"#
        );
    }
}
