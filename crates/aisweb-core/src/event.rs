//! Event types for the site's content.
//!
//! This module provides the records handed to the core by the content layer:
//! - [`Event`]: a scheduled club event
//! - [`Location`]: where (or on which platform) the event happens
//! - [`Presenter`], [`Supplement`]: nested event data
//! - [`ProjectDemo`]: an entry on the projects page

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::time::{EventWindow, TemporalPhase};

/// The event type that hides presenter cards.
pub const SOCIAL_EVENT_TYPE: &str = "Social";

/// Where an event takes place.
///
/// Content stores locations as display strings ("In-person", "Google Meet").
/// Unknown strings are kept verbatim in [`Location::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Location {
    InPerson,
    Hybrid,
    GoogleMeet,
    Zoom,
    Discord,
    YouTube,
    MicrosoftTeams,
    Virtual,
    Other(String),
}

impl Location {
    /// Parses a location from its content representation.
    ///
    /// Accepts the display names as well as the snake_case online keys
    /// (`youtube`, `google_meet`, `ms_teams`, `virtual`).
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "In-person" => Self::InPerson,
            "Hybrid" => Self::Hybrid,
            "Google Meet" | "google_meet" => Self::GoogleMeet,
            "Zoom" => Self::Zoom,
            "Discord" => Self::Discord,
            "YouTube" | "youtube" => Self::YouTube,
            "Microsoft Teams" | "ms_teams" => Self::MicrosoftTeams,
            "Virtual" | "virtual" => Self::Virtual,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the human-readable name for this location.
    pub fn display_name(&self) -> &str {
        match self {
            Self::InPerson => "In-person",
            Self::Hybrid => "Hybrid",
            Self::GoogleMeet => "Google Meet",
            Self::Zoom => "Zoom",
            Self::Discord => "Discord",
            Self::YouTube => "YouTube",
            Self::MicrosoftTeams => "Microsoft Teams",
            Self::Virtual => "Virtual",
            Self::Other(name) => name,
        }
    }

    /// Returns true if attendees can show up in a physical room.
    pub fn is_physical(&self) -> bool {
        matches!(self, Self::InPerson | Self::Hybrid)
    }

    /// Returns true if a recording is published after the event.
    pub fn has_recording(&self) -> bool {
        matches!(self, Self::YouTube | Self::Hybrid)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for Location {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.display_name().to_string()
    }
}

/// Deserializes an absent-able field, mapping an explicit `null` to the
/// type's default so a `"signup": null` reads the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A person presenting at an event, referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presenter {
    pub name: String,
}

/// Supplementary material attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplement {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: String,
    pub link: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}

/// A club event as authored in the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// URL slug identifying the event.
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub presenters: Vec<Presenter>,
    /// Free-form category ("Workshop", "Social", ...).
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: Location,
    #[serde(default)]
    pub detailed_location: Option<String>,
    /// Stream or meeting URL. Empty when there is none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub join_link: String,
    /// Physical room identifier, appended to the campus map URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub room_no: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub supplements: Vec<Supplement>,
    /// Flyer image URL.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub slides: Option<String>,
    /// RSVP form URL. Empty when there is none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub signup: String,
}

impl Event {
    /// Creates a new event with required fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            presenters: Vec::new(),
            event_type: String::new(),
            location: Location::default(),
            detailed_location: None,
            join_link: String::new(),
            room_no: String::new(),
            tags: Vec::new(),
            start_date,
            end_date,
            last_updated: None,
            supplements: Vec::new(),
            image: None,
            slides: None,
            signup: String::new(),
        }
    }

    /// Returns the event's time bounds.
    pub fn window(&self) -> EventWindow {
        EventWindow::new(self.start_date, self.end_date)
    }

    /// Classifies the event against `now`.
    pub fn phase_at(&self, now: DateTime<Utc>) -> TemporalPhase {
        self.window().phase_at(now)
    }

    /// Returns true for social events, which have no presenters section.
    pub fn is_social(&self) -> bool {
        self.event_type == SOCIAL_EVENT_TYPE
    }

    /// Returns the slides URL if one is set and non-empty.
    pub fn slides_link(&self) -> Option<&str> {
        self.slides.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns the flyer URL if one is set and non-empty.
    pub fn image_link(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.is_empty())
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the event type.
    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Builder method to set the join link.
    pub fn with_join_link(mut self, link: impl Into<String>) -> Self {
        self.join_link = link.into();
        self
    }

    /// Builder method to set the room.
    pub fn with_room(mut self, room_no: impl Into<String>) -> Self {
        self.room_no = room_no.into();
        self
    }

    /// Builder method to set the signup link.
    pub fn with_signup(mut self, signup: impl Into<String>) -> Self {
        self.signup = signup.into();
        self
    }

    /// Builder method to set the slides link.
    pub fn with_slides(mut self, slides: impl Into<String>) -> Self {
        self.slides = Some(slides.into());
        self
    }

    /// Builder method to set the flyer image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Builder method to add a presenter.
    pub fn with_presenter(mut self, name: impl Into<String>) -> Self {
        self.presenters.push(Presenter { name: name.into() });
        self
    }
}

/// A demoable project listed on the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDemo {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}
