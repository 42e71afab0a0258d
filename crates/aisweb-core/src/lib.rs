//! Core types: events, phases, officer links, calendar records, formatting

pub mod calendar;
pub mod event;
pub mod format;
pub mod links;
pub mod officer;
pub mod resolver;
pub mod time;
pub mod tracing;

pub use calendar::{CalendarEvent, CalendarLinkBuilder, CalendarLinkGenerator, CalendarLinks};
pub use event::{Event, Location, Presenter, ProjectDemo, Supplement};
pub use format::{DisplayOptions, html_escape};
pub use links::{
    SocialLinkNormalizer, SocialPlatform, normalize_github, normalize_linkedin,
    normalize_personal_site,
};
pub use officer::{ContactKind, ContactLink, Officer, OfficerCard};
pub use resolver::{
    ActionButton, ButtonSet, ButtonSetKind, EventState, EventStateResolver, LocationIcon,
};
pub use time::{EventWindow, TemporalPhase};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
