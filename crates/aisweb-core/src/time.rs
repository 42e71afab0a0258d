//! Time types for scheduled events.
//!
//! This module provides [`EventWindow`] for an event's start/end bounds, and
//! [`TemporalPhase`] for classifying an event against a sampled `now`.
//!
//! The phase is never stored. Callers sample `now` once per render and pass
//! the same instant to every comparison made for that render.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where an event sits relative to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalPhase {
    /// The event has not started yet (`now < start`).
    Upcoming,
    /// The event is in progress (`start <= now <= end`).
    Live,
    /// The event is over (`now > end`).
    Past,
}

impl TemporalPhase {
    /// Builds a phase from the two independent window checks.
    ///
    /// `in_past` wins if both flags are set, which only happens for a window
    /// whose start is after its end.
    pub fn from_flags(in_future: bool, in_past: bool) -> Self {
        if in_past {
            Self::Past
        } else if in_future {
            Self::Upcoming
        } else {
            Self::Live
        }
    }

    /// Returns the lowercase name used in CSS classes and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Live => "live",
            Self::Past => "past",
        }
    }

    /// Returns the call-to-action label for the join link in this phase.
    pub fn link_text(&self) -> &'static str {
        match self {
            Self::Past => "Watch Recording",
            Self::Upcoming => "Stream Link",
            Self::Live => "Join event",
        }
    }

    /// Returns true if the event is over.
    pub fn is_past(&self) -> bool {
        matches!(self, Self::Past)
    }
}

/// The start/end bounds of an event, in UTC.
///
/// Both bounds are inclusive: an event is live at exactly its start and at
/// exactly its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWindow {
    /// When the event starts.
    pub start: DateTime<Utc>,
    /// When the event ends.
    pub end: DateTime<Utc>,
}

impl EventWindow {
    /// Creates a new window.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Returns true if `now` is strictly before the start.
    pub fn is_in_future(&self, now: DateTime<Utc>) -> bool {
        now < self.start
    }

    /// Returns true if `now` is strictly after the end.
    pub fn is_in_past(&self, now: DateTime<Utc>) -> bool {
        now > self.end
    }

    /// Classifies `now` against this window.
    pub fn phase_at(&self, now: DateTime<Utc>) -> TemporalPhase {
        TemporalPhase::from_flags(self.is_in_future(now), self.is_in_past(now))
    }
}
