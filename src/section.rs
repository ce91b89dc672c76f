use std::sync::LazyLock;

use regex::Regex;

use crate::stats::StatsError;

// Host plus every path segment except the final one.
static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)/[^/]*$").expect("section pattern compiles"));

/// Derives the section identifier from a request URL: drop an optional
/// leading `scheme://`, then drop the last path segment.
///
/// A URL with nothing left before its final `/` (a bare host, or a relative
/// URL like `/favicon.ico`) carries no section and is rejected rather than
/// mapped to an empty group.
pub fn classify_section(url: &str) -> Result<String, StatsError> {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let captures = SECTION_RE
        .captures(without_scheme)
        .ok_or_else(|| StatsError::MalformedUrl(url.to_string()))?;
    Ok(captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::classify_section;
    use crate::stats::StatsError;

    #[test]
    fn drops_scheme_and_final_segment() {
        assert_eq!(
            classify_section("http://my.site.com/pages/create").unwrap(),
            "my.site.com/pages"
        );
    }

    #[test]
    fn keeps_intermediate_segments() {
        assert_eq!(
            classify_section("https://my.site.com/api/v2/users/list").unwrap(),
            "my.site.com/api/v2/users"
        );
    }

    #[test]
    fn works_without_scheme() {
        assert_eq!(
            classify_section("my.site.com/pets/create").unwrap(),
            "my.site.com/pets"
        );
    }

    #[test]
    fn trailing_slash_yields_the_host() {
        assert_eq!(classify_section("my.site.com/").unwrap(), "my.site.com");
    }

    #[test]
    fn bare_host_is_malformed() {
        assert_eq!(
            classify_section("http://my.site.com"),
            Err(StatsError::MalformedUrl("http://my.site.com".to_string()))
        );
    }

    #[test]
    fn relative_url_is_malformed() {
        assert_eq!(
            classify_section("/apache_pb.gif"),
            Err(StatsError::MalformedUrl("/apache_pb.gif".to_string()))
        );
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(matches!(
            classify_section(""),
            Err(StatsError::MalformedUrl(_))
        ));
    }
}
