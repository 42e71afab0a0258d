//! Content stored as JSON files in a directory.
//!
//! Layout:
//!
//! ```text
//! <root>/
//! ├── events/
//! │   ├── intro-to-llms.json     one Event per file, named by slug
//! │   └── demo-night.json
//! ├── officers.json              array of Officer, roster order
//! └── projects.json              array of ProjectDemo (optional)
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use aisweb_core::{Event, Officer, ProjectDemo};

use crate::error::{ContentError, ContentResult};
use crate::source::{BoxFuture, ContentSource, officer_name_matches, sort_events};

const SOURCE_NAME: &str = "directory";
const EVENTS_DIR: &str = "events";
const OFFICERS_FILE: &str = "officers.json";
const PROJECTS_FILE: &str = "projects.json";

/// A [`ContentSource`] reading JSON files from a directory.
///
/// Files are read on every call, so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct DirectoryContentSource {
    root: PathBuf,
}

impl DirectoryContentSource {
    /// Creates a source rooted at `root` without checking it exists.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a source rooted at `root`, checking that it is a directory.
    pub fn open(root: impl Into<PathBuf>) -> ContentResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ContentError::configuration(format!(
                "content root is not a directory: {}",
                root.display()
            ))
            .with_source_name(SOURCE_NAME));
        }
        Ok(Self { root })
    }

    /// Returns the content root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn event_path(&self, slug: &str) -> PathBuf {
        self.root.join(EVENTS_DIR).join(format!("{slug}.json"))
    }

    async fn load_officers(&self) -> ContentResult<Vec<Officer>> {
        let path = self.root.join(OFFICERS_FILE);
        match read_optional(&path).await? {
            Some(content) => parse(&path, &content),
            None => {
                debug!(path = %path.display(), "no officers file");
                Ok(Vec::new())
            }
        }
    }
}

/// Returns true if `slug` is safe to use as a file name.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl ContentSource for DirectoryContentSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn fetch_event(&self, slug: &str) -> BoxFuture<'_, ContentResult<Option<Event>>> {
        let slug = slug.to_string();
        Box::pin(async move {
            if !is_valid_slug(&slug) {
                debug!(slug = %slug, "rejecting malformed event slug");
                return Ok(None);
            }
            let path = self.event_path(&slug);
            match read_optional(&path).await? {
                Some(content) => parse(&path, &content).map(Some),
                None => Ok(None),
            }
        })
    }

    fn fetch_officer(&self, name: &str) -> BoxFuture<'_, ContentResult<Option<Officer>>> {
        let name = name.to_string();
        Box::pin(async move {
            let officers = self.load_officers().await?;
            Ok(officers
                .into_iter()
                .find(|o| officer_name_matches(&o.name, &name)))
        })
    }

    fn list_events(&self) -> BoxFuture<'_, ContentResult<Vec<Event>>> {
        Box::pin(async move {
            let dir = self.root.join(EVENTS_DIR);
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
                Err(e) => return Err(io_error(&dir, e)),
            };

            let mut events = Vec::new();
            while let Some(entry) = entries.next_entry().await.map_err(|e| io_error(&dir, e))? {
                let path = entry.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                    continue;
                }
                let Some(content) = read_optional(&path).await? else {
                    continue;
                };
                match parse::<Event>(&path, &content) {
                    Ok(event) => events.push(event),
                    Err(e) => warn!(error = %e, "skipping unreadable event"),
                }
            }

            sort_events(&mut events);
            debug!(count = events.len(), "listed events");
            Ok(events)
        })
    }

    fn list_officers(&self) -> BoxFuture<'_, ContentResult<Vec<Officer>>> {
        Box::pin(self.load_officers())
    }

    fn list_projects(&self) -> BoxFuture<'_, ContentResult<Vec<ProjectDemo>>> {
        Box::pin(async move {
            let path = self.root.join(PROJECTS_FILE);
            match read_optional(&path).await? {
                Some(content) => parse(&path, &content),
                None => Ok(Vec::new()),
            }
        })
    }
}

/// Reads a file, mapping "not found" to `None`.
async fn read_optional(path: &Path) -> ContentResult<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_error(path, e)),
    }
}

fn parse<T: DeserializeOwned>(path: &Path, content: &str) -> ContentResult<T> {
    serde_json::from_str(content).map_err(|e| {
        ContentError::invalid_content(format!("failed to parse {}: {}", path.display(), e))
            .with_source_name(SOURCE_NAME)
            .with_source(e)
    })
}

fn io_error(path: &Path, e: io::Error) -> ContentError {
    ContentError::io(format!("failed to read {}", path.display()))
        .with_source_name(SOURCE_NAME)
        .with_source(e)
}
