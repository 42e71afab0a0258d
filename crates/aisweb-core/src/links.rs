//! Normalization of officer profile links.
//!
//! Officers type their GitHub, LinkedIn and personal-site fields by hand, so
//! the raw values range from bare handles to full URLs with trailing paths.
//! This module turns them into canonical `https://` profile URLs.
//!
//! # Example
//!
//! ```
//! use aisweb_core::links::{normalize_github, normalize_linkedin};
//!
//! assert_eq!(normalize_github("github.com/foo/bar").as_deref(), Some("https://github.com/foo"));
//! assert_eq!(
//!     normalize_linkedin("https://www.linkedin.com/in/jane-doe/details").as_deref(),
//!     Some("https://www.linkedin.com/in/jane-doe"),
//! );
//! assert_eq!(normalize_github(""), None);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Characters allowed in a GitHub or LinkedIn handle.
static NON_HANDLE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("Invalid handle regex"));

/// Characters allowed in a personal site host.
static NON_HOST_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.A-Za-z0-9_-]").expect("Invalid host regex"));

const HTTPS: &str = "https://";

/// A profile platform with a handle-based URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
    GitHub,
    LinkedIn,
}

impl SocialPlatform {
    /// Returns the marker that precedes the handle in a full profile URL.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::GitHub => "github.com/",
            Self::LinkedIn => "linkedin.com/in/",
        }
    }

    /// Returns the canonical profile URL prefix.
    pub fn profile_base(&self) -> &'static str {
        match self {
            Self::GitHub => "https://github.com/",
            Self::LinkedIn => "https://www.linkedin.com/in/",
        }
    }
}

/// Normalizer for officer profile links.
///
/// Stateless; every method is a pure function of its input.
#[derive(Debug, Default, Clone, Copy)]
pub struct SocialLinkNormalizer;

impl SocialLinkNormalizer {
    /// Creates a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Extracts the bare handle from a raw handle-or-URL string.
    ///
    /// The text after the last platform marker is taken if the marker is
    /// present, otherwise the whole input. A single leading slash and any
    /// trailing path are dropped, then characters outside `[A-Za-z0-9_-]`
    /// are removed.
    pub fn handle(&self, platform: SocialPlatform, raw: &str) -> String {
        let raw = raw.trim();
        let tail = raw
            .rsplit(platform.marker())
            .next()
            .unwrap_or(raw);
        let tail = tail.strip_prefix('/').unwrap_or(tail);
        let first_segment = tail.split('/').next().unwrap_or_default();
        NON_HANDLE_CHARS.replace_all(first_segment, "").into_owned()
    }

    /// Returns the canonical profile URL, or `None` for empty input.
    ///
    /// Input that sanitizes down to an empty handle also yields `None`.
    pub fn profile(&self, platform: SocialPlatform, raw: &str) -> Option<String> {
        if raw.trim().is_empty() {
            return None;
        }
        let handle = self.handle(platform, raw);
        if handle.is_empty() {
            tracing::debug!(?platform, raw, "profile link sanitized to nothing");
            return None;
        }
        Some(format!("{}{}", platform.profile_base(), handle))
    }

    /// Returns an `https://` URL for a personal website, or `None` for empty input.
    ///
    /// If the input already contains `https://`, the part after its last
    /// occurrence is kept with everything but `.`, `-` and word characters
    /// removed. Other inputs are prefixed with `https://` as they are.
    pub fn personal_site(&self, raw: &str) -> Option<String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if !raw.contains(HTTPS) {
            return Some(format!("{HTTPS}{raw}"));
        }
        let tail = raw.rsplit(HTTPS).next().unwrap_or(raw);
        let tail = tail.strip_prefix('/').unwrap_or(tail);
        let host = NON_HOST_CHARS.replace_all(tail, "");
        if host.is_empty() {
            return None;
        }
        Some(format!("{HTTPS}{host}"))
    }
}

/// Convenience function for GitHub profiles.
///
/// See [`SocialLinkNormalizer::profile`] for details.
pub fn normalize_github(raw: &str) -> Option<String> {
    SocialLinkNormalizer::new().profile(SocialPlatform::GitHub, raw)
}

/// Convenience function for LinkedIn profiles.
///
/// See [`SocialLinkNormalizer::profile`] for details.
pub fn normalize_linkedin(raw: &str) -> Option<String> {
    SocialLinkNormalizer::new().profile(SocialPlatform::LinkedIn, raw)
}

/// Convenience function for personal websites.
///
/// See [`SocialLinkNormalizer::personal_site`] for details.
pub fn normalize_personal_site(raw: &str) -> Option<String> {
    SocialLinkNormalizer::new().personal_site(raw)
}
