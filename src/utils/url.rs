//! URL utilities for consistent URL handling
//!
//! This module provides the origin extraction used when stamping generated
//! guides with the address of the serving host.

use url::{Origin, Url};

/// URL utilities for consistent URL handling
pub struct UrlUtils;

impl UrlUtils {
    /// Extract the origin (scheme + host + optional port) of a URL
    ///
    /// The origin is the `scheme://host[:port]` portion with no path, query,
    /// or fragment. A port is included only when it differs from the
    /// scheme's default, so `http://host:80/x` yields `http://host` while
    /// `http://host:8080/x` yields `http://host:8080`.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL string to extract the origin from
    ///
    /// # Returns
    ///
    /// * `Some(String)` - The ASCII-serialized origin
    /// * `None` - The input did not parse, or has no meaningful origin
    ///   (opaque schemes such as `data:` or `mailto:`)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use m3u_epg::utils::url::UrlUtils;
    ///
    /// assert_eq!(
    ///     UrlUtils::origin("http://host:8080/epg.xml"),
    ///     Some("http://host:8080".to_string())
    /// );
    /// assert_eq!(
    ///     UrlUtils::origin("https://example.com/a/b?c=d"),
    ///     Some("https://example.com".to_string())
    /// );
    /// assert_eq!(UrlUtils::origin("not a url"), None);
    /// ```
    pub fn origin(url: &str) -> Option<String> {
        let parsed = Url::parse(url).ok()?;
        match parsed.origin() {
            origin @ Origin::Tuple(..) => Some(origin.ascii_serialization()),
            Origin::Opaque(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_keeps_explicit_non_default_port() {
        assert_eq!(
            UrlUtils::origin("http://192.168.1.10:8080/playlist.m3u"),
            Some("http://192.168.1.10:8080".to_string())
        );
    }

    #[test]
    fn test_origin_drops_default_port() {
        assert_eq!(
            UrlUtils::origin("http://example.com:80/x"),
            Some("http://example.com".to_string())
        );
        assert_eq!(
            UrlUtils::origin("https://example.com:443/x"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_origin_strips_path_query_and_fragment() {
        assert_eq!(
            UrlUtils::origin("https://example.com/a/b?q=1#frag"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_origin_of_bare_host_url() {
        assert_eq!(
            UrlUtils::origin("http://host:8080/"),
            Some("http://host:8080".to_string())
        );
    }

    #[test]
    fn test_unparseable_input_has_no_origin() {
        assert_eq!(UrlUtils::origin(""), None);
        assert_eq!(UrlUtils::origin("not a url"), None);
        assert_eq!(UrlUtils::origin("/relative/path"), None);
    }

    #[test]
    fn test_opaque_scheme_has_no_origin() {
        assert_eq!(UrlUtils::origin("mailto:user@example.com"), None);
        assert_eq!(UrlUtils::origin("data:text/plain,hello"), None);
    }
}
