//! UniProt REST endpoint URL builders

/// Build the search URL: `{base}?query={query}&size={size}`
///
/// The query is percent-encoded. A trailing `?` or `/` on `base` is dropped
/// so both `.../search` and `.../search?` work as configured bases.
pub fn search_url(base: &str, query: &str, size: usize) -> String {
    let base = base.trim_end_matches(['?', '/']);
    format!("{}?query={}&size={}", base, urlencoding::encode(query), size)
}

/// Build the entry URL: `{base}/{accession}`
pub fn entry_url(base: &str, accession: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{}/{}", base, urlencoding::encode(accession))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url() {
        let url = search_url("https://rest.uniprot.org/uniprotkb/search", "insulin", 3);
        assert_eq!(url, "https://rest.uniprot.org/uniprotkb/search?query=insulin&size=3");
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = search_url("http://localhost/search?", "gene:INS AND organism_id:9606", 1);
        assert_eq!(
            url,
            "http://localhost/search?query=gene%3AINS%20AND%20organism_id%3A9606&size=1"
        );
    }

    #[test]
    fn test_entry_url() {
        assert_eq!(
            entry_url("https://rest.uniprot.org/uniprotkb/", "P01308"),
            "https://rest.uniprot.org/uniprotkb/P01308"
        );
        assert_eq!(entry_url("http://localhost/uniprotkb", "P01308-2"), "http://localhost/uniprotkb/P01308-2");
    }

    #[test]
    fn test_entry_url_cannot_escape_path() {
        assert_eq!(entry_url("http://localhost/uniprotkb", "../admin"), "http://localhost/uniprotkb/..%2Fadmin");
    }
}
