//! Event state resolution.
//!
//! [`EventStateResolver`] takes an [`Event`] and one sampled `now` and
//! decides everything the event page shows in its action area: the phase,
//! the primary link text and target, the location icon and text, and which
//! buttons appear.
//!
//! Each optional button comes from its own selector returning `Option`, so
//! the renderer never needs to repeat any of the visibility rules.
//!
//! # Example
//!
//! ```
//! use aisweb_core::{Event, EventStateResolver, Location, TemporalPhase};
//! use chrono::{Duration, Utc};
//!
//! let now = Utc::now();
//! let event = Event::new("demo", "Demo Night", now - Duration::hours(1), now + Duration::hours(1))
//!     .with_location(Location::Zoom)
//!     .with_join_link("https://zoom.us/j/123");
//!
//! let state = EventStateResolver::default().resolve(&event, now);
//! assert_eq!(state.phase, TemporalPhase::Live);
//! assert_eq!(state.link_text, "Join event");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarEvent, CalendarLinkBuilder, CalendarLinkGenerator, CalendarLinks};
use crate::event::{Event, Location};
use crate::time::TemporalPhase;

/// Campus map URL; the room number is appended to it.
pub const DEFAULT_MAP_BASE_URL: &str = "https://map.concept3d.com/?id=1772#!s/";

/// Link text for physical locations.
pub const DIRECTIONS_TEXT: &str = "Get Directions";

/// Label of the signup button.
pub const SIGNUP_TEXT: &str = "RSVP";

/// Label of the slides button.
pub const SLIDES_TEXT: &str = "View Slides";

/// The icon shown next to the location text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationIcon {
    Room,
    Duo,
    Videocam,
    Discord,
    YouTube,
}

impl LocationIcon {
    /// Selects the icon for a location. Unlisted locations get the
    /// livestream icon.
    pub fn for_location(location: &Location) -> Self {
        match location {
            Location::InPerson | Location::Hybrid => Self::Room,
            Location::GoogleMeet => Self::Duo,
            Location::Zoom => Self::Videocam,
            Location::Discord => Self::Discord,
            _ => Self::YouTube,
        }
    }

    /// Returns the icon identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Duo => "duo",
            Self::Videocam => "videocam",
            Self::Discord => "discord",
            Self::YouTube => "youtube",
        }
    }
}

/// Which set of buttons the action area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSetKind {
    Live,
    Upcoming,
    PastWithRecording,
    PastNoRecording,
}

impl ButtonSetKind {
    /// Classifies a `(phase, location)` pair.
    pub fn classify(phase: TemporalPhase, location: &Location) -> Self {
        match phase {
            TemporalPhase::Live => Self::Live,
            TemporalPhase::Upcoming => Self::Upcoming,
            TemporalPhase::Past if location.has_recording() => Self::PastWithRecording,
            TemporalPhase::Past => Self::PastNoRecording,
        }
    }
}

/// A link rendered as a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    pub label: String,
    pub href: String,
    /// Whether the pulsing "live" dot is drawn on the button.
    pub live_indicator: bool,
}

impl ActionButton {
    /// Creates a button without the live indicator.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            live_indicator: false,
        }
    }

    /// Builder method to set the live indicator.
    pub fn with_live_indicator(mut self, live: bool) -> Self {
        self.live_indicator = live;
        self
    }
}

/// The buttons in the action area, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSet {
    pub kind: ButtonSetKind,
    pub signup: Option<ActionButton>,
    pub primary: Option<ActionButton>,
    pub hybrid: Option<ActionButton>,
    pub slides: Option<ActionButton>,
    /// The "Add To Calendar" menu, for upcoming events only.
    pub calendar: Option<CalendarLinks>,
}

impl ButtonSet {
    /// An empty action area.
    pub fn empty(kind: ButtonSetKind) -> Self {
        Self {
            kind,
            signup: None,
            primary: None,
            hybrid: None,
            slides: None,
            calendar: None,
        }
    }

    /// Returns true if nothing is shown.
    pub fn is_empty(&self) -> bool {
        self.signup.is_none()
            && self.primary.is_none()
            && self.hybrid.is_none()
            && self.slides.is_none()
            && self.calendar.is_none()
    }

    /// Returns the visible buttons in display order, excluding the calendar menu.
    pub fn buttons(&self) -> Vec<&ActionButton> {
        [&self.signup, &self.primary, &self.hybrid, &self.slides]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// The resolved presentation state of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventState {
    pub phase: TemporalPhase,
    /// Primary link text after the location override.
    pub link_text: String,
    /// Primary link target after the location override.
    pub event_link: String,
    /// Text shown next to the location icon.
    pub location_text: String,
    pub icon: LocationIcon,
    pub buttons: ButtonSet,
}

/// Resolves events into [`EventState`]s.
#[derive(Debug)]
pub struct EventStateResolver {
    map_base_url: String,
    calendar: Box<dyn CalendarLinkBuilder>,
}

impl Default for EventStateResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_BASE_URL)
    }
}

impl EventStateResolver {
    /// Creates a resolver using the given map base URL and the built-in
    /// calendar link generator.
    pub fn new(map_base_url: impl Into<String>) -> Self {
        Self {
            map_base_url: map_base_url.into(),
            calendar: Box::new(CalendarLinkGenerator::new()),
        }
    }

    /// Builder method to swap the calendar link builder.
    pub fn with_calendar_builder(mut self, builder: impl CalendarLinkBuilder + 'static) -> Self {
        self.calendar = Box::new(builder);
        self
    }

    /// Returns the map base URL.
    pub fn map_base_url(&self) -> &str {
        &self.map_base_url
    }

    /// Resolves an event against `now`.
    pub fn resolve(&self, event: &Event, now: DateTime<Utc>) -> EventState {
        let window = event.window();
        let in_future = window.is_in_future(now);
        let in_past = window.is_in_past(now);
        let phase = TemporalPhase::from_flags(in_future, in_past);
        let phase_text = phase.link_text();

        // Built from the phase text and raw join link, before the physical
        // location override below.
        let hybrid = hybrid_button(event, phase_text, in_future, in_past);

        let (link_text, event_link) = if event.location.is_physical() {
            (
                DIRECTIONS_TEXT.to_string(),
                format!("{}{}", self.map_base_url, event.room_no),
            )
        } else {
            (phase_text.to_string(), event.join_link.clone())
        };

        let kind = ButtonSetKind::classify(phase, &event.location);
        let primary = ActionButton::new(&link_text, &event_link);
        let buttons = match kind {
            ButtonSetKind::Live => ButtonSet {
                kind,
                signup: signup_button(event, phase),
                primary: Some(primary.with_live_indicator(true)),
                hybrid,
                slides: slides_button(event),
                calendar: None,
            },
            ButtonSetKind::Upcoming => ButtonSet {
                kind,
                signup: signup_button(event, phase),
                primary: Some(primary),
                hybrid,
                slides: slides_button(event),
                calendar: Some(self.calendar.build(&CalendarEvent::from_event(event))),
            },
            ButtonSetKind::PastWithRecording => ButtonSet {
                kind,
                signup: signup_button(event, phase),
                primary: Some(primary),
                hybrid,
                slides: slides_button(event),
                calendar: None,
            },
            ButtonSetKind::PastNoRecording => ButtonSet::empty(kind),
        };

        tracing::trace!(
            event = %event.id,
            phase = phase.as_str(),
            ?kind,
            "resolved event state"
        );

        EventState {
            phase,
            link_text,
            event_link,
            location_text: location_text(event).to_string(),
            icon: LocationIcon::for_location(&event.location),
            buttons,
        }
    }
}

/// Text shown next to the location icon: the room for physical locations,
/// the platform name otherwise.
pub fn location_text(event: &Event) -> &str {
    if event.location.is_physical() {
        &event.room_no
    } else {
        event.location.display_name()
    }
}

/// The RSVP button: shown while the event is not over and has a signup link.
pub fn signup_button(event: &Event, phase: TemporalPhase) -> Option<ActionButton> {
    (!event.signup.is_empty() && !phase.is_past())
        .then(|| ActionButton::new(SIGNUP_TEXT, &event.signup))
}

/// The slides button: shown whenever slides are present.
pub fn slides_button(event: &Event) -> Option<ActionButton> {
    event
        .slides_link()
        .map(|slides| ActionButton::new(SLIDES_TEXT, slides))
}

/// The secondary button for hybrid events, pointing at the join link.
///
/// Decides its own live indicator from the raw window checks rather than
/// from the resolved phase.
pub fn hybrid_button(
    event: &Event,
    link_text: &str,
    in_future: bool,
    in_past: bool,
) -> Option<ActionButton> {
    (event.location == Location::Hybrid).then(|| {
        ActionButton::new(link_text, &event.join_link).with_live_indicator(!in_future && !in_past)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn t() -> DateTime<Utc> {
        utc(2025, 2, 5, 22, 0, 0)
    }

    /// An event running from T-1h to T+1h.
    fn event_around_t(location: Location) -> Event {
        Event::new(
            "demo-night",
            "Demo Night",
            t() - Duration::hours(1),
            t() + Duration::hours(1),
        )
        .with_description("Show what you built")
        .with_location(location)
        .with_join_link("https://youtube.com/live/xyz")
        .with_room("ECSW 1.315")
        .with_signup("https://forms.example/rsvp")
        .with_slides("https://slides.example/demo")
    }

    fn resolver() -> EventStateResolver {
        EventStateResolver::default()
    }

    mod phase_and_text {
        use super::*;

        #[test]
        fn link_text_follows_phase_for_online_events() {
            let event = event_around_t(Location::YouTube);
            let r = resolver();
            assert_eq!(r.resolve(&event, t() - Duration::hours(2)).link_text, "Stream Link");
            assert_eq!(r.resolve(&event, t()).link_text, "Join event");
            assert_eq!(r.resolve(&event, t() + Duration::hours(2)).link_text, "Watch Recording");
        }

        #[test]
        fn physical_locations_get_directions() {
            for location in [Location::InPerson, Location::Hybrid] {
                for now in [t() - Duration::hours(2), t(), t() + Duration::hours(2)] {
                    let state = resolver().resolve(&event_around_t(location.clone()), now);
                    assert_eq!(state.link_text, "Get Directions");
                    assert_eq!(
                        state.event_link,
                        "https://map.concept3d.com/?id=1772#!s/ECSW 1.315"
                    );
                    assert_eq!(state.location_text, "ECSW 1.315");
                    assert_eq!(state.icon, LocationIcon::Room);
                }
            }
        }

        #[test]
        fn online_location_text_is_display_name() {
            let state = resolver().resolve(&event_around_t(Location::GoogleMeet), t());
            assert_eq!(state.location_text, "Google Meet");
            assert_eq!(state.event_link, "https://youtube.com/live/xyz");
        }

        #[test]
        fn custom_map_base() {
            let r = EventStateResolver::new("https://maps.example/?room=");
            let state = r.resolve(&event_around_t(Location::InPerson), t());
            assert_eq!(state.event_link, "https://maps.example/?room=ECSW 1.315");
            assert_eq!(r.map_base_url(), "https://maps.example/?room=");
        }

        #[test]
        fn bounds_are_live() {
            let event = event_around_t(Location::Zoom);
            assert_eq!(resolver().resolve(&event, event.start_date).phase, TemporalPhase::Live);
            assert_eq!(resolver().resolve(&event, event.end_date).phase, TemporalPhase::Live);
        }
    }

    mod icons {
        use super::*;

        #[test]
        fn icon_mapping() {
            assert_eq!(LocationIcon::for_location(&Location::InPerson), LocationIcon::Room);
            assert_eq!(LocationIcon::for_location(&Location::Hybrid), LocationIcon::Room);
            assert_eq!(LocationIcon::for_location(&Location::GoogleMeet), LocationIcon::Duo);
            assert_eq!(LocationIcon::for_location(&Location::Zoom), LocationIcon::Videocam);
            assert_eq!(LocationIcon::for_location(&Location::Discord), LocationIcon::Discord);
            assert_eq!(LocationIcon::for_location(&Location::YouTube), LocationIcon::YouTube);
        }

        #[test]
        fn unknown_locations_fall_back_to_youtube() {
            assert_eq!(
                LocationIcon::for_location(&Location::Other("Twitch".into())),
                LocationIcon::YouTube
            );
            assert_eq!(
                LocationIcon::for_location(&Location::MicrosoftTeams),
                LocationIcon::YouTube
            );
        }
    }

    mod button_sets {
        use super::*;

        #[test]
        fn classify() {
            assert_eq!(
                ButtonSetKind::classify(TemporalPhase::Live, &Location::Zoom),
                ButtonSetKind::Live
            );
            assert_eq!(
                ButtonSetKind::classify(TemporalPhase::Upcoming, &Location::InPerson),
                ButtonSetKind::Upcoming
            );
            assert_eq!(
                ButtonSetKind::classify(TemporalPhase::Past, &Location::YouTube),
                ButtonSetKind::PastWithRecording
            );
            assert_eq!(
                ButtonSetKind::classify(TemporalPhase::Past, &Location::Hybrid),
                ButtonSetKind::PastWithRecording
            );
            assert_eq!(
                ButtonSetKind::classify(TemporalPhase::Past, &Location::Zoom),
                ButtonSetKind::PastNoRecording
            );
        }

        #[test]
        fn live_event() {
            let state = resolver().resolve(&event_around_t(Location::YouTube), t());
            let buttons = &state.buttons;
            assert_eq!(buttons.kind, ButtonSetKind::Live);
            assert_eq!(buttons.signup.as_ref().unwrap().label, "RSVP");
            let primary = buttons.primary.as_ref().unwrap();
            assert_eq!(primary.label, "Join event");
            assert!(primary.live_indicator);
            assert!(buttons.hybrid.is_none());
            assert_eq!(buttons.slides.as_ref().unwrap().label, "View Slides");
            assert!(buttons.calendar.is_none());
        }

        #[test]
        fn live_hybrid_secondary_button() {
            let state = resolver().resolve(&event_around_t(Location::Hybrid), t());
            let hybrid = state.buttons.hybrid.as_ref().unwrap();
            assert_eq!(hybrid.label, "Join event");
            assert_eq!(hybrid.href, "https://youtube.com/live/xyz");
            assert!(hybrid.live_indicator);

            let primary = state.buttons.primary.as_ref().unwrap();
            assert_eq!(primary.label, "Get Directions");
            assert!(primary.live_indicator);
        }

        #[test]
        fn upcoming_event_has_calendar_menu() {
            let now = t() - Duration::hours(3);
            let state = resolver().resolve(&event_around_t(Location::Hybrid), now);
            let buttons = &state.buttons;
            assert_eq!(buttons.kind, ButtonSetKind::Upcoming);
            assert!(buttons.signup.is_some());
            assert!(!buttons.primary.as_ref().unwrap().live_indicator);
            let hybrid = buttons.hybrid.as_ref().unwrap();
            assert_eq!(hybrid.label, "Stream Link");
            assert!(!hybrid.live_indicator);
            let calendar = buttons.calendar.as_ref().unwrap();
            assert!(calendar.google.contains("text=Demo+Night"));
            assert!(calendar.apple.starts_with("data:text/calendar"));
            assert!(calendar.outlook.contains("outlook.live.com"));
        }

        #[test]
        fn past_with_recording() {
            let now = t() + Duration::hours(3);
            let state = resolver().resolve(&event_around_t(Location::YouTube), now);
            let buttons = &state.buttons;
            assert_eq!(buttons.kind, ButtonSetKind::PastWithRecording);
            assert!(buttons.signup.is_none());
            let primary = buttons.primary.as_ref().unwrap();
            assert_eq!(primary.label, "Watch Recording");
            assert_eq!(primary.href, "https://youtube.com/live/xyz");
            assert!(buttons.slides.is_some());
            assert!(buttons.calendar.is_none());
        }

        #[test]
        fn past_hybrid_keeps_recording_button() {
            let now = t() + Duration::hours(3);
            let state = resolver().resolve(&event_around_t(Location::Hybrid), now);
            let hybrid = state.buttons.hybrid.as_ref().unwrap();
            assert_eq!(hybrid.label, "Watch Recording");
            assert!(!hybrid.live_indicator);
        }

        #[test]
        fn past_without_recording_is_empty() {
            let now = t() + Duration::hours(3);
            for location in [Location::InPerson, Location::Zoom, Location::Discord] {
                let state = resolver().resolve(&event_around_t(location), now);
                assert_eq!(state.buttons.kind, ButtonSetKind::PastNoRecording);
                assert!(state.buttons.is_empty());
                assert!(state.buttons.buttons().is_empty());
            }
        }

        #[test]
        fn physical_event_without_room_links_bare_map() {
            for location in [Location::InPerson, Location::Hybrid] {
                let event = event_around_t(location).with_room("");
                let state = resolver().resolve(&event, t());
                assert_eq!(state.link_text, "Get Directions");
                assert_eq!(state.event_link, DEFAULT_MAP_BASE_URL);
                assert_eq!(state.location_text, "");
                assert_eq!(state.icon, LocationIcon::Room);
                assert_eq!(state.buttons.primary.unwrap().href, DEFAULT_MAP_BASE_URL);
            }
        }

        #[test]
        fn upcoming_hybrid_without_signup() {
            let event = event_around_t(Location::Hybrid).with_signup("");
            let state = resolver().resolve(&event, t() - Duration::hours(3));
            let buttons = &state.buttons;
            assert_eq!(buttons.kind, ButtonSetKind::Upcoming);
            assert!(buttons.signup.is_none());
            assert!(buttons.calendar.is_some());
            let labels: Vec<_> = buttons.buttons().into_iter().map(|b| b.label.as_str()).collect();
            assert_eq!(labels, vec!["Get Directions", "Stream Link", "View Slides"]);
        }

        #[test]
        fn display_order() {
            let state = resolver().resolve(&event_around_t(Location::Hybrid), t());
            let labels: Vec<_> = state
                .buttons
                .buttons()
                .into_iter()
                .map(|b| b.label.as_str())
                .collect();
            assert_eq!(labels, vec!["RSVP", "Get Directions", "Join event", "View Slides"]);
        }
    }

    mod selectors {
        use super::*;

        #[test]
        fn signup_visibility() {
            let event = event_around_t(Location::Zoom);
            assert!(signup_button(&event, TemporalPhase::Upcoming).is_some());
            assert!(signup_button(&event, TemporalPhase::Live).is_some());
            assert!(signup_button(&event, TemporalPhase::Past).is_none());

            let no_signup = event.with_signup("");
            assert!(signup_button(&no_signup, TemporalPhase::Upcoming).is_none());
        }

        #[test]
        fn slides_visibility() {
            let event = event_around_t(Location::Zoom);
            assert_eq!(
                slides_button(&event).unwrap().href,
                "https://slides.example/demo"
            );
            let mut no_slides = event;
            no_slides.slides = None;
            assert!(slides_button(&no_slides).is_none());
        }

        #[test]
        fn location_text_per_location() {
            assert_eq!(location_text(&event_around_t(Location::Hybrid)), "ECSW 1.315");
            assert_eq!(location_text(&event_around_t(Location::Discord)), "Discord");
            let no_room = event_around_t(Location::InPerson).with_room("");
            assert_eq!(location_text(&no_room), "");
        }

        #[test]
        fn hybrid_only_for_hybrid() {
            let event = event_around_t(Location::InPerson);
            assert!(hybrid_button(&event, "Join event", false, false).is_none());
        }

        #[test]
        fn hybrid_indicator_from_flags() {
            let event = event_around_t(Location::Hybrid);
            assert!(hybrid_button(&event, "x", false, false).unwrap().live_indicator);
            assert!(!hybrid_button(&event, "x", true, false).unwrap().live_indicator);
            assert!(!hybrid_button(&event, "x", false, true).unwrap().live_indicator);
        }
    }

    #[derive(Debug)]
    struct FixedLinks;

    impl CalendarLinkBuilder for FixedLinks {
        fn build(&self, event: &CalendarEvent) -> CalendarLinks {
            CalendarLinks {
                apple: format!("apple:{}", event.title),
                google: format!("google:{}", event.location.as_deref().unwrap_or("-")),
                outlook: format!("outlook:{}", event.url.as_deref().unwrap_or("-")),
            }
        }
    }

    #[test]
    fn calendar_builder_receives_record() {
        let r = resolver().with_calendar_builder(FixedLinks);
        let event = event_around_t(Location::Zoom).with_room("");
        let state = r.resolve(&event, t() - Duration::hours(2));
        let calendar = state.buttons.calendar.unwrap();
        assert_eq!(calendar.apple, "apple:Demo Night");
        assert_eq!(calendar.google, "google:-");
        assert_eq!(calendar.outlook, "outlook:https://youtube.com/live/xyz");
    }
}
