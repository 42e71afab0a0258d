//! Page view models.
//!
//! Each loader reads what a page needs from the content source and hands the
//! renderer plain data. `now` is passed in so a whole page is resolved
//! against a single instant.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use aisweb_content::ContentSource;
use aisweb_core::resolver::location_text;
use aisweb_core::{
    Event, EventState, LocationIcon, Officer, OfficerCard, ProjectDemo, TemporalPhase,
};

use crate::error::ServerResult;
use crate::state::AppState;

/// Where a request without a usable slug is sent.
pub const EVENTS_PATH: &str = "/events";

/// One topic in the homepage summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryTopic {
    pub title: &'static str,
    pub copy: &'static str,
    pub icon: &'static str,
}

/// Leading words of the homepage headline.
pub const SUMMARY_HEADLINE: &str = "UNLOCKING THE POWER OF";

/// Highlighted tail of the homepage headline.
pub const SUMMARY_HIGHLIGHT: &str = "ARTIFICIAL INTELLIGENCE";

/// Homepage topics, in display order.
pub const SUMMARY_TOPICS: [SummaryTopic; 3] = [
    SummaryTopic {
        title: "AI Literacy",
        copy: "Simplifying AI concepts through workshops and seminars, making AI more accessible to everyone",
        icon: "/images/Logos/topic1.png",
    },
    SummaryTopic {
        title: "Networking",
        copy: "Connecting with industry leaders and other professionals to expand the horizons of artificial intelligence",
        icon: "/images/Logos/topic2.png",
    },
    SummaryTopic {
        title: "Collaborative Projects",
        copy: "Programs for students to work on real-world AI projects, fostering practical experience and innovation",
        icon: "/images/Logos/topic3.png",
    },
];

/// Everything the event detail page shows.
#[derive(Debug, Clone)]
pub struct EventPage {
    pub event: Event,
    pub state: EventState,
    /// Start time, e.g. `Feb 5, 2025 @ 4:00 pm CST`.
    pub time_text: String,
    /// Upper-cased event type shown above the title.
    pub event_type_header: String,
    /// Presenter cards. Empty for social events.
    pub presenters: Vec<OfficerCard>,
    /// Public URL visitors can share.
    pub share_url: String,
}

impl EventPage {
    /// Returns the document title, e.g. `Intro to LLMs – AIS`.
    pub fn page_title(&self, site_name: &str) -> String {
        format!("{} \u{2013} {}", self.event.title, site_name)
    }
}

/// What the event route should do.
#[derive(Debug, Clone)]
pub enum EventPageOutcome {
    /// No slug was given; send the visitor elsewhere.
    Redirect(&'static str),
    /// No event has this slug.
    NotFound,
    /// Render the page.
    Render(Box<EventPage>),
}

/// Loads the event page for `slug`.
///
/// A missing or blank slug redirects without touching the content source.
pub async fn load_event_page(
    state: &AppState,
    slug: Option<&str>,
    now: DateTime<Utc>,
) -> ServerResult<EventPageOutcome> {
    let Some(slug) = slug.map(str::trim).filter(|s| !s.is_empty()) else {
        debug!("no event slug, redirecting to {}", EVENTS_PATH);
        return Ok(EventPageOutcome::Redirect(EVENTS_PATH));
    };

    let Some(event) = state.content.fetch_event(slug).await? else {
        info!(slug, "event not found");
        return Ok(EventPageOutcome::NotFound);
    };

    let presenters = if event.is_social() {
        Vec::new()
    } else {
        resolve_presenters(state.content.as_ref(), &event)
            .await?
            .iter()
            .map(OfficerCard::from_officer)
            .collect()
    };

    let page = EventPage {
        state: state.resolver.resolve(&event, now),
        time_text: state.display.event_time(event.start_date),
        event_type_header: event.event_type.to_uppercase(),
        share_url: state.config.event_url(&event.id),
        presenters,
        event,
    };
    Ok(EventPageOutcome::Render(Box::new(page)))
}

/// Looks up each presenter on the officer roster.
///
/// Presenters who are not officers get a placeholder record.
pub async fn resolve_presenters(
    content: &dyn ContentSource,
    event: &Event,
) -> ServerResult<Vec<Officer>> {
    let mut officers = Vec::with_capacity(event.presenters.len());
    for presenter in &event.presenters {
        let officer = match content.fetch_officer(&presenter.name).await? {
            Some(officer) => officer,
            None => {
                debug!(name = %presenter.name, "presenter is not an officer, using placeholder");
                Officer::presenter_placeholder(&presenter.name)
            }
        };
        officers.push(officer);
    }
    Ok(officers)
}

/// One row of the events listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    pub event_type: String,
    pub time_text: String,
    pub location_text: String,
    pub icon: LocationIcon,
    pub phase: TemporalPhase,
}

/// The events listing, split around `now`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventsPage {
    /// Live and upcoming events, soonest first.
    pub upcoming: Vec<EventSummary>,
    /// Finished events, most recent first.
    pub past: Vec<EventSummary>,
}

/// Loads the events listing.
pub async fn load_events_page(state: &AppState, now: DateTime<Utc>) -> ServerResult<EventsPage> {
    let events = state.content.list_events().await?;

    let mut page = EventsPage::default();
    for event in &events {
        let summary = EventSummary {
            id: event.id.clone(),
            title: event.title.clone(),
            event_type: event.event_type.clone(),
            time_text: state.display.event_time(event.start_date),
            location_text: location_text(event).to_string(),
            icon: LocationIcon::for_location(&event.location),
            phase: event.phase_at(now),
        };
        if summary.phase.is_past() {
            page.past.push(summary);
        } else {
            page.upcoming.push(summary);
        }
    }
    page.upcoming.reverse();

    debug!(
        upcoming = page.upcoming.len(),
        past = page.past.len(),
        "loaded events listing"
    );
    Ok(page)
}

/// Loads the officer roster as cards.
pub async fn load_team(state: &AppState) -> ServerResult<Vec<OfficerCard>> {
    let officers = state.content.list_officers().await?;
    debug!(count = officers.len(), "loaded officers");
    Ok(officers.iter().map(OfficerCard::from_officer).collect())
}

/// Loads project demos. The projects page does not show them yet.
pub async fn load_projects(state: &AppState) -> ServerResult<Vec<ProjectDemo>> {
    let demos = state.content.list_projects().await?;
    debug!(count = demos.len(), "loaded project demos");
    Ok(demos)
}
