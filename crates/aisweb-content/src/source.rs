//! ContentSource trait definition.
//!
//! A [`ContentSource`] is where the site reads its events, officers and
//! project demos from. Pages depend on the trait only, so the backing store
//! can be a directory of JSON files, an in-memory fixture, or anything else.

use std::future::Future;
use std::pin::Pin;

use aisweb_core::{Event, Officer, ProjectDemo};

use crate::error::ContentResult;

/// A boxed future for async trait methods.
///
/// Boxed futures keep the trait object-safe so the server can hold an
/// `Arc<dyn ContentSource>`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read access to the site's content.
///
/// Lookups return `Ok(None)` when the record does not exist; `Err` is
/// reserved for failures of the store itself.
pub trait ContentSource: Send + Sync {
    /// Returns the name of this source (e.g. "directory", "memory").
    fn name(&self) -> &str;

    /// Fetches one event by its slug.
    fn fetch_event(&self, slug: &str) -> BoxFuture<'_, ContentResult<Option<Event>>>;

    /// Fetches one officer by display name.
    ///
    /// Names match case-insensitively after trimming.
    fn fetch_officer(&self, name: &str) -> BoxFuture<'_, ContentResult<Option<Officer>>>;

    /// Lists all events, most recent start first.
    fn list_events(&self) -> BoxFuture<'_, ContentResult<Vec<Event>>>;

    /// Lists all officers in roster order.
    fn list_officers(&self) -> BoxFuture<'_, ContentResult<Vec<Officer>>>;

    /// Lists project demos. Sources without demos return an empty list.
    fn list_projects(&self) -> BoxFuture<'_, ContentResult<Vec<ProjectDemo>>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

/// Returns true if `candidate` names the same person as `wanted`.
pub fn officer_name_matches(candidate: &str, wanted: &str) -> bool {
    candidate.trim().eq_ignore_ascii_case(wanted.trim())
}

/// Orders events most recent start first.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| b.start_date.cmp(&a.start_date));
}
