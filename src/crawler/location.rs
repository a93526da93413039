//! Location metadata derived from chapter URLs
//!
//! Chapter pages are addressed like
//! `/policy-manual/volume-3-part-b-chapter-2`, so volume and part can be read
//! off the last path segment without loading the page.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use url::Url;

/// Label used when the URL carries no volume token
pub const UNKNOWN_VOLUME: &str = "Unknown Volume";

/// Label used when the URL carries no part token
pub const UNKNOWN_SECTION: &str = "Unknown Section";

/// Coarse position of a chapter in the manual
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// e.g. `Volume 3`
    pub volume: String,

    /// e.g. `Part B`
    pub section: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            volume: UNKNOWN_VOLUME.to_string(),
            section: UNKNOWN_SECTION.to_string(),
        }
    }
}

/// Derive volume and section from a URL, falling back to the unknown labels
///
/// The final path segment is percent-decoded and split on `-`; token 1 names
/// the volume and token 3 the part. Relative or otherwise unparseable input
/// is treated as a bare path with any query or fragment removed.
pub fn parse_location(url: &str) -> Location {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => {
            let end = url.find(['?', '#']).unwrap_or(url.len());
            url[..end].to_string()
        }
    };

    let segment = path.rsplit('/').next().unwrap_or_default();
    let segment = percent_decode_str(segment).decode_utf8_lossy();
    let tokens: Vec<&str> = segment.split('-').collect();

    Location {
        volume: tokens
            .get(1)
            .map_or_else(|| UNKNOWN_VOLUME.to_string(), |t| format!("Volume {}", t)),
        section: tokens.get(3).map_or_else(
            || UNKNOWN_SECTION.to_string(),
            |t| format!("Part {}", t.to_uppercase()),
        ),
    }
}
