// SPDX-License-Identifier: PMPL-1.0-or-later

//! The `q` parameter carried from the landing page to the results page

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

pub const QUERY_PARAM: &str = "q";

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// URL of the results page for `query`, or `None` when the trimmed query
/// is empty.
///
/// Any query string already on `results_page` is kept, minus an earlier
/// `q`; a `#fragment` stays at the end.
pub fn redirect_url(results_page: &str, query: &str) -> Option<String> {
    let term = query.trim();
    if term.is_empty() {
        return None;
    }

    let (page, fragment) = match results_page.split_once('#') {
        Some((page, fragment)) => (page, Some(fragment)),
        None => (results_page, None),
    };
    let (path, existing) = page.split_once('?').unwrap_or((page, ""));

    let mut pairs: Vec<String> = existing
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split('=').next() != Some(QUERY_PARAM))
        .map(str::to_string)
        .collect();
    pairs.push(format!(
        "{}={}",
        QUERY_PARAM,
        utf8_percent_encode(term, URI_COMPONENT)
    ));

    let mut url = format!("{}?{}", path, pairs.join("&"));
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    Some(url)
}

/// Read the `q` parameter from an absolute URL or a relative location such
/// as `results.html?q=Rust#top`.
pub fn query_from_location(location: &str) -> Option<String> {
    let (_, query) = location.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_encodes_like_encode_uri_component() {
        assert_eq!(
            redirect_url("results.html", "Rust").as_deref(),
            Some("results.html?q=Rust")
        );
        assert_eq!(
            redirect_url("results.html", " C++ & C# ").as_deref(),
            Some("results.html?q=C%2B%2B%20%26%20C%23")
        );
        assert_eq!(
            redirect_url("results.html", "it's (ok)!").as_deref(),
            Some("results.html?q=it's%20(ok)!")
        );
    }

    #[test]
    fn redirect_keeps_existing_query_and_fragment() {
        let url = redirect_url("results.html?lang=en", "Rust").unwrap();
        assert_eq!(url, "results.html?lang=en&q=Rust");
        assert_eq!(query_from_location(&url).as_deref(), Some("Rust"));

        let url = redirect_url("/search/results.html?q=Go&lang=pt#list", "C#").unwrap();
        assert_eq!(url, "/search/results.html?lang=pt&q=C%23#list");
        assert_eq!(query_from_location(&url).as_deref(), Some("C#"));

        assert_eq!(
            redirect_url("results.html?", "Zig").as_deref(),
            Some("results.html?q=Zig")
        );
    }

    #[test]
    fn blank_query_does_not_redirect() {
        assert_eq!(redirect_url("results.html", "   "), None);
    }

    #[test]
    fn reads_query_from_relative_and_absolute_locations() {
        assert_eq!(
            query_from_location("results.html?q=C%2B%2B").as_deref(),
            Some("C++")
        );
        assert_eq!(
            query_from_location("https://example.org/results.html?lang=pt&q=Go+lang#top")
                .as_deref(),
            Some("Go lang")
        );
        assert_eq!(query_from_location("results.html"), None);
        assert_eq!(query_from_location("results.html?lang=pt"), None);
    }

    #[test]
    fn redirect_and_read_back_agree() {
        let url = redirect_url("results.html", "Objective-C & ç").unwrap();
        assert_eq!(query_from_location(&url).as_deref(), Some("Objective-C & ç"));
    }
}
