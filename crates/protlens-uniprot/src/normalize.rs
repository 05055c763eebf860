//! UniProtKB JSON entry normalization
//!
//! Turns one entry from `GET /uniprotkb/{accession}` into a [`ProteinRecord`].
//! The function is total: sparse or oddly typed input produces defaults and
//! sentinels, never an error.
//!
//! Minimum shape consumed (everything else is ignored):
//!
//! ```text
//! primaryAccession, uniProtkbId
//! proteinDescription.recommendedName.fullName.value
//! organism.scientificName
//! sequence.value
//! comments[].commentType
//! comments[].texts[0].value                      (FUNCTION, DOMAIN)
//! comments[].subcellularLocations[].location.value (SUBCELLULAR LOCATION)
//! uniProtKBCrossReferences[].database
//! references[].citation.{title,authors[],journal,citationCrossReferences[]}
//! ```

use crate::json_path::{get_array, get_path, get_str};
use crate::models::{
    CitationRecord, ProteinRecord, StructureReference, NOT_AVAILABLE, NO_DOMAIN, NO_FUNCTION,
    NO_SUBCELLULAR_LOCATION,
};
use serde_json::Value;

pub const COMMENT_FUNCTION: &str = "FUNCTION";
pub const COMMENT_SUBCELLULAR_LOCATION: &str = "SUBCELLULAR LOCATION";
pub const COMMENT_DOMAIN: &str = "DOMAIN";
pub const STRUCTURE_DATABASE: &str = "PDB";
pub const PUBMED_DATABASE: &str = "PubMed";
pub const DOI_DATABASE: &str = "DOI";

/// Normalize a raw UniProtKB entry.
pub fn normalize(entry: &Value) -> ProteinRecord {
    let comments = get_array(entry, &["comments"]);

    ProteinRecord {
        accession: get_str(entry, &["primaryAccession"], ""),
        entry_id: get_str(entry, &["uniProtkbId"], ""),
        protein_name: get_str(
            entry,
            &["proteinDescription", "recommendedName", "fullName", "value"],
            "",
        ),
        organism: get_str(entry, &["organism", "scientificName"], ""),
        function: summarize(first_texts(comments, COMMENT_FUNCTION), NO_FUNCTION),
        subcellular_location: summarize(subcellular_locations(comments), NO_SUBCELLULAR_LOCATION),
        domains: summarize(first_texts(comments, COMMENT_DOMAIN), NO_DOMAIN),
        sequence: get_str(entry, &["sequence", "value"], ""),
        structures: structures(entry),
        citations: get_array(entry, &["references"]).iter().map(citation).collect(),
    }
}

fn comments_of<'a>(comments: &'a [Value], kind: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
    comments
        .iter()
        .filter(move |c| get_path(c, &["commentType"]).and_then(Value::as_str) == Some(kind))
}

/// First text of each matching comment.
///
/// A comment without `texts` contributes "N/A"; one with an empty `texts`
/// list contributes an empty line.
fn first_texts(comments: &[Value], kind: &str) -> Vec<String> {
    comments_of(comments, kind)
        .map(|comment| match get_path(comment, &["texts"]) {
            None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
            Some(texts) => match texts.as_array().and_then(|t| t.first()) {
                Some(first) => get_str(first, &["value"], NOT_AVAILABLE),
                None => String::new(),
            },
        })
        .collect()
}

fn subcellular_locations(comments: &[Value]) -> Vec<String> {
    comments_of(comments, COMMENT_SUBCELLULAR_LOCATION)
        .flat_map(|comment| get_array(comment, &["subcellularLocations"]))
        .map(|loc| get_str(loc, &["location", "value"], NOT_AVAILABLE))
        .collect()
}

/// Newline-join `parts`; the sentinel replaces only a fully empty result.
fn summarize(parts: Vec<String>, sentinel: &str) -> String {
    let joined = parts.join("\n");
    if joined.is_empty() {
        sentinel.to_string()
    } else {
        joined
    }
}

fn structures(entry: &Value) -> Vec<StructureReference> {
    get_array(entry, &["uniProtKBCrossReferences"])
        .iter()
        .filter(|xref| get_path(xref, &["database"]).and_then(Value::as_str) == Some(STRUCTURE_DATABASE))
        .cloned()
        .map(StructureReference)
        .collect()
}

fn citation(reference: &Value) -> CitationRecord {
    let xrefs = get_array(reference, &["citation", "citationCrossReferences"]);

    let authors = get_array(reference, &["citation", "authors"])
        .iter()
        .filter_map(Value::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    CitationRecord {
        title: get_str(reference, &["citation", "title"], NOT_AVAILABLE),
        authors,
        journal: get_str(reference, &["citation", "journal"], NOT_AVAILABLE),
        pubmed_id: xref_id(xrefs, PUBMED_DATABASE),
        doi: xref_id(xrefs, DOI_DATABASE),
    }
}

/// Id of the first cross-reference into `database`, or "N/A".
fn xref_id(xrefs: &[Value], database: &str) -> String {
    xrefs
        .iter()
        .find(|x| get_path(x, &["database"]).and_then(Value::as_str) == Some(database))
        .map(|x| get_str(x, &["id"], NOT_AVAILABLE))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
