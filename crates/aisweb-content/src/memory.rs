//! In-memory content sources for tests.

use aisweb_core::{Event, Officer, ProjectDemo};

use crate::error::{ContentError, ContentResult};
use crate::source::{BoxFuture, ContentSource, officer_name_matches, sort_events};

/// A [`ContentSource`] holding its records in memory.
///
/// Seeds pages and routes with fixed records.
#[derive(Debug, Clone, Default)]
pub struct StaticContentSource {
    events: Vec<Event>,
    officers: Vec<Officer>,
    projects: Vec<ProjectDemo>,
}

impl StaticContentSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an event. Its `id` is the slug it is fetched by.
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// Adds an officer to the end of the roster.
    pub fn with_officer(mut self, officer: Officer) -> Self {
        self.officers.push(officer);
        self
    }

    /// Adds a project demo.
    pub fn with_project(mut self, project: ProjectDemo) -> Self {
        self.projects.push(project);
        self
    }
}

impl ContentSource for StaticContentSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn fetch_event(&self, slug: &str) -> BoxFuture<'_, ContentResult<Option<Event>>> {
        let event = self.events.iter().find(|e| e.id == slug).cloned();
        Box::pin(async move { Ok(event) })
    }

    fn fetch_officer(&self, name: &str) -> BoxFuture<'_, ContentResult<Option<Officer>>> {
        let officer = self
            .officers
            .iter()
            .find(|o| officer_name_matches(&o.name, name))
            .cloned();
        Box::pin(async move { Ok(officer) })
    }

    fn list_events(&self) -> BoxFuture<'_, ContentResult<Vec<Event>>> {
        let mut events = self.events.clone();
        sort_events(&mut events);
        Box::pin(async move { Ok(events) })
    }

    fn list_officers(&self) -> BoxFuture<'_, ContentResult<Vec<Officer>>> {
        let officers = self.officers.clone();
        Box::pin(async move { Ok(officers) })
    }

    fn list_projects(&self) -> BoxFuture<'_, ContentResult<Vec<ProjectDemo>>> {
        let projects = self.projects.clone();
        Box::pin(async move { Ok(projects) })
    }
}

/// A [`ContentSource`] that fails every call with the same error.
///
/// Exercises the error page without a broken directory on disk.
#[derive(Debug)]
pub struct ErrorContentSource {
    name: String,
    error: ContentError,
}

impl ErrorContentSource {
    /// Creates a source that always returns `error`.
    pub fn new(name: impl Into<String>, error: ContentError) -> Self {
        Self {
            name: name.into(),
            error,
        }
    }

    fn error(&self) -> ContentError {
        ContentError::new(self.error.code(), self.error.message()).with_source_name(&self.name)
    }
}

impl ContentSource for ErrorContentSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_event(&self, _slug: &str) -> BoxFuture<'_, ContentResult<Option<Event>>> {
        let error = self.error();
        Box::pin(async move { Err(error) })
    }

    fn fetch_officer(&self, _name: &str) -> BoxFuture<'_, ContentResult<Option<Officer>>> {
        let error = self.error();
        Box::pin(async move { Err(error) })
    }

    fn list_events(&self) -> BoxFuture<'_, ContentResult<Vec<Event>>> {
        let error = self.error();
        Box::pin(async move { Err(error) })
    }

    fn list_officers(&self) -> BoxFuture<'_, ContentResult<Vec<Officer>>> {
        let error = self.error();
        Box::pin(async move { Err(error) })
    }

    fn list_projects(&self) -> BoxFuture<'_, ContentResult<Vec<ProjectDemo>>> {
        let error = self.error();
        Box::pin(async move { Err(error) })
    }
}
