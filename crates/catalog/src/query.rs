//! Query-string synchronizer for the search term.
//!
//! The search term is the one filter field mirrored into the navigable URL,
//! so a search box elsewhere in the UI can deep-link into the catalog.
//! Writing an empty term removes the parameter entirely (never `search=`);
//! other query parameters are left untouched.

use url::Url;

/// The query parameter carrying the search term.
pub const SEARCH_PARAM: &str = "search";

/// Mirror `term` into `url`'s query string.
pub fn write_term_to_url(url: &mut Url, term: &str) {
    let others: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != SEARCH_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &others {
            pairs.append_pair(key, value);
        }
        if !term.is_empty() {
            pairs.append_pair(SEARCH_PARAM, term);
        }
    }

    // query_pairs_mut leaves an empty query rather than none
    if url.query() == Some("") {
        url.set_query(None);
    }
}

/// Read the mirrored search term out of `url`, if present.
#[must_use]
pub fn term_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == SEARCH_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_setting_term_writes_parameter() {
        let mut u = url("https://bookhive.example/books");
        write_term_to_url(&mut u, "dune");
        assert_eq!(u.as_str(), "https://bookhive.example/books?search=dune");
    }

    #[test]
    fn test_clearing_term_removes_parameter_entirely() {
        let mut u = url("https://bookhive.example/books?search=dune");
        write_term_to_url(&mut u, "");
        assert_eq!(u.as_str(), "https://bookhive.example/books");
        assert_eq!(u.query(), None);
    }

    #[test]
    fn test_other_parameters_survive() {
        let mut u = url("https://bookhive.example/books?page=2&search=old");
        write_term_to_url(&mut u, "new");
        assert_eq!(
            u.as_str(),
            "https://bookhive.example/books?page=2&search=new"
        );

        write_term_to_url(&mut u, "");
        assert_eq!(u.as_str(), "https://bookhive.example/books?page=2");
    }

    #[test]
    fn test_adopting_term_from_url() {
        let u = url("https://bookhive.example/books?search=dune");
        assert_eq!(term_from_url(&u), Some("dune".to_owned()));

        let u = url("https://bookhive.example/books");
        assert_eq!(term_from_url(&u), None);
    }

    #[test]
    fn test_roundtrip_percent_encoding() {
        let mut u = url("https://bookhive.example/books");
        write_term_to_url(&mut u, "war & peace");
        assert_eq!(term_from_url(&u), Some("war & peace".to_owned()));
    }
}
