//! "Add to calendar" links.
//!
//! The event page offers three calendar links for upcoming events. The core
//! builds a [`CalendarEvent`] record from an [`Event`]; a
//! [`CalendarLinkBuilder`] turns that record into links. The default builder,
//! [`CalendarLinkGenerator`], produces an ICS data URL, a Google Calendar
//! template URL and an Outlook compose URL.

use std::fmt;

use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, EventLike};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::event::Event;

const GOOGLE_BASE: &str = "https://calendar.google.com/calendar/render";
const OUTLOOK_BASE: &str = "https://outlook.live.com/calendar/0/action/compose";
const ICS_PREFIX: &str = "data:text/calendar;charset=utf8,";

const COMPACT_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const UID_DOMAIN: &str = "aisweb";

/// The record handed to a calendar link builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Stable identifier, derived from the event slug.
    pub uid: String,
    pub title: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// The room, or `None` when the event has no room.
    pub location: Option<String>,
    /// The join link, or `None` when the event has no join link.
    pub url: Option<String>,
}

impl CalendarEvent {
    /// Builds the record for an event.
    ///
    /// Empty `roomNo` and `joinLink` fields become `None`.
    pub fn from_event(event: &Event) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            uid: format!("{}@{UID_DOMAIN}", event.id),
            title: event.title.clone(),
            description: event.description.clone(),
            start: event.start_date,
            end: event.end_date,
            location: non_empty(&event.room_no),
            url: non_empty(&event.join_link),
        }
    }

    /// The description with the join link appended, for providers that
    /// have no dedicated URL field.
    fn details(&self) -> String {
        match &self.url {
            Some(url) if self.description.is_empty() => url.clone(),
            Some(url) => format!("{}\n\n{}", self.description, url),
            None => self.description.clone(),
        }
    }
}

/// One link per supported calendar provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarLinks {
    /// ICS data URL, opened by Apple Calendar and other native clients.
    pub apple: String,
    pub google: String,
    pub outlook: String,
}

/// Turns a [`CalendarEvent`] into provider links.
pub trait CalendarLinkBuilder: Send + Sync + fmt::Debug {
    fn build(&self, event: &CalendarEvent) -> CalendarLinks;
}

/// The built-in link builder.
#[derive(Debug, Default, Clone, Copy)]
pub struct CalendarLinkGenerator;

impl CalendarLinkGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Returns a Google Calendar event template URL.
    pub fn google(&self, event: &CalendarEvent) -> String {
        let dates = format!(
            "{}/{}",
            event.start.format(COMPACT_FORMAT),
            event.end.format(COMPACT_FORMAT)
        );
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("action", "TEMPLATE")
            .append_pair("text", &event.title)
            .append_pair("details", &event.details())
            .append_pair("dates", &dates);
        if let Some(location) = &event.location {
            query.append_pair("location", location);
        }
        format!("{GOOGLE_BASE}?{}", query.finish())
    }

    /// Returns an Outlook.com compose URL.
    pub fn outlook(&self, event: &CalendarEvent) -> String {
        let start = event.start.format(ISO_FORMAT).to_string();
        let end = event.end.format(ISO_FORMAT).to_string();
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("path", "/calendar/action/compose")
            .append_pair("rru", "addevent")
            .append_pair("startdt", &start)
            .append_pair("enddt", &end)
            .append_pair("subject", &event.title)
            .append_pair("body", &event.details());
        if let Some(location) = &event.location {
            query.append_pair("location", location);
        }
        format!("{OUTLOOK_BASE}?{}", query.finish())
    }

    /// Returns the raw ICS document for the event.
    ///
    /// `DTSTAMP` is the generation time.
    pub fn ics_document(&self, event: &CalendarEvent) -> String {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.uid);
        ics_event.add_property("DTSTAMP", Utc::now().format(COMPACT_FORMAT).to_string());
        ics_event.summary(&event.title);
        ics_event.starts(event.start);
        ics_event.ends(event.end);

        if !event.description.is_empty() {
            ics_event.description(&event.description);
        }
        if let Some(location) = &event.location {
            ics_event.location(location);
        }
        if let Some(url) = &event.url {
            ics_event.add_property("URL", url);
        }

        let mut cal = Calendar::new();
        cal.push(ics_event.done());
        cal.done().to_string()
    }

    /// Returns the ICS document as a data URL.
    pub fn ics(&self, event: &CalendarEvent) -> String {
        format!(
            "{ICS_PREFIX}{}",
            urlencoding::encode(&self.ics_document(event))
        )
    }
}

impl CalendarLinkBuilder for CalendarLinkGenerator {
    fn build(&self, event: &CalendarEvent) -> CalendarLinks {
        CalendarLinks {
            apple: self.ics(event),
            google: self.google(event),
            outlook: self.outlook(event),
        }
    }
}
