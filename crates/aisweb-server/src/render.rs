//! HTML rendering.
//!
//! Pages are plain strings built from the view models in [`crate::pages`].
//! Every piece of content text and every attribute value goes through
//! [`html_escape`]. There is no client-side script: the calendar menu is a
//! `<details>` element and the officer quote is a CSS hover tooltip.

use aisweb_core::{
    ActionButton, ButtonSet, CalendarLinks, OfficerCard, ProjectDemo, html_escape,
};

use crate::pages::{
    EVENTS_PATH, EventPage, EventSummary, EventsPage, SUMMARY_HEADLINE, SUMMARY_HIGHLIGHT,
    SUMMARY_TOPICS,
};

/// Site name used when no configuration is at hand (error pages).
pub const FALLBACK_SITE_NAME: &str = "AIS";

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;color:#1f2933}\
.site-nav{display:flex;gap:1.5rem;padding:1rem 2rem;background:#0b1f3a}\
.site-nav a{color:#fff;text-decoration:none;font-weight:600}\
main{max-width:64rem;margin:0 auto;padding:2rem}\
.button{position:relative;display:inline-block;padding:.5rem;border-radius:.375rem;background:#60a5fa;color:#fff;font-weight:600;text-decoration:none;cursor:pointer}\
.live-dot{position:absolute;top:-.25rem;right:-.25rem;width:.75rem;height:.75rem;border-radius:50%;background:#a855f7}\
.actions{display:flex;flex-wrap:wrap;gap:1rem;margin:1rem 0}\
.calendar-menu{position:relative}\
.calendar-items a{display:flex;gap:.5rem;padding:.5rem 1rem}\
.officer-card{width:16rem;border-radius:.75rem;text-align:center}\
.officer-card .photo{width:13rem;height:13rem;border-radius:50%;object-fit:cover;padding:1rem}\
.contacts{display:flex;justify-content:center;gap:.5rem}\
.quote{position:relative}\
.quote-text{display:none;position:absolute;z-index:10;padding:1rem;border-radius:.75rem;background:#e5e7eb}\
.quote:hover .quote-text{display:block}\
.cards{display:flex;flex-wrap:wrap;gap:1rem}";

/// Wraps a page body in the site layout.
pub fn layout(site_name: &str, title: &str, body: &str) -> String {
    let site = html_escape(site_name);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="icon" type="image/svg+xml" href="/favicon.svg">
<style>{STYLE}</style>
</head>
<body>
<nav class="site-nav"><a class="brand" href="/">{site}</a><a href="/events">Events</a><a href="/team">Team</a><a href="/projects">Projects</a></nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = html_escape(title),
    )
}

/// Renders one action button.
pub fn action_button(button: &ActionButton) -> String {
    let live = if button.live_indicator {
        r#"<span class="live-dot"></span>"#
    } else {
        ""
    };
    format!(
        r#"<a class="button" target="_blank" rel="noreferrer" href="{}">{}{}</a>"#,
        html_escape(&button.href),
        html_escape(&button.label),
        live
    )
}

/// Renders the "Add To Calendar" menu.
pub fn calendar_menu(links: &CalendarLinks) -> String {
    let item = |href: &str, icon: &str, label: &str| {
        format!(
            r#"<a target="_blank" rel="noreferrer" href="{}"><img src="{}" alt="">{}</a>"#,
            html_escape(href),
            icon,
            label
        )
    };
    format!(
        r#"<details class="calendar-menu"><summary class="button">Add To Calendar</summary><div class="calendar-items">{}{}{}</div></details>"#,
        item(&links.apple, "/apple.svg", "Apple"),
        item(&links.google, "/google.svg", "Google"),
        item(&links.outlook, "/outlook.svg", "Outlook"),
    )
}

/// Renders the action area: buttons in display order, then the calendar menu.
pub fn action_area(buttons: &ButtonSet) -> String {
    let mut html = String::from(r#"<div class="actions">"#);
    for button in buttons.buttons() {
        html.push_str(&action_button(button));
    }
    if let Some(links) = &buttons.calendar {
        html.push_str(&calendar_menu(links));
    }
    html.push_str("</div>");
    html
}

/// Renders an officer or presenter card.
pub fn officer_card(card: &OfficerCard) -> String {
    let mut contacts = String::new();
    for contact in &card.contacts {
        let target = if contact.kind.opens_new_tab() {
            r#" target="_blank" rel="noreferrer""#
        } else {
            ""
        };
        contacts.push_str(&format!(
            r#"<a class="contact {icon}"{target} href="{href}">{icon}</a>"#,
            icon = contact.kind.icon(),
            href = html_escape(&contact.href),
        ));
    }
    if let Some(quote) = &card.quote {
        contacts.push_str(&format!(
            r#"<span class="contact quote">format_quote<span class="quote-text">{}</span></span>"#,
            html_escape(quote)
        ));
    }

    format!(
        r#"<div class="officer-card"><img class="photo" src="{src}" alt="{name}"><div class="name">{name}</div><div class="title">{title}</div><div class="contacts">{contacts}</div></div>"#,
        src = html_escape(&card.image_src),
        name = html_escape(&card.name),
        title = html_escape(&card.title),
    )
}

fn cards(cards: &[OfficerCard]) -> String {
    let inner: String = cards.iter().map(officer_card).collect();
    format!(r#"<div class="cards">{inner}</div>"#)
}

/// Renders the homepage.
pub fn home_page(site_name: &str) -> String {
    let topics: String = SUMMARY_TOPICS
        .iter()
        .map(|topic| {
            format!(
                r#"<div class="topic"><img src="{}" alt=""><h4>{}</h4><p>{}</p></div>"#,
                topic.icon,
                html_escape(topic.title),
                html_escape(topic.copy)
            )
        })
        .collect();
    let body = format!(
        r#"<section class="summary"><h2>{SUMMARY_HEADLINE} <span class="highlight">{SUMMARY_HIGHLIGHT}</span></h2><div class="topics">{topics}</div></section>"#
    );
    layout(site_name, site_name, &body)
}

/// Renders the officer roster.
pub fn team_page(site_name: &str, officers: &[OfficerCard]) -> String {
    let body = format!(
        r#"<section class="team"><h1>Officers</h1>{}</section>"#,
        cards(officers)
    );
    layout(site_name, &format!("Team \u{2013} {site_name}"), &body)
}

fn event_row(event: &EventSummary) -> String {
    format!(
        r#"<a class="event-row" href="{EVENTS_PATH}/{id}"><span class="event-type">{kind}</span><span class="event-title">{title}</span><span class="time">{time}</span><span class="icon icon-{icon}"></span><span class="location">{location}</span></a>"#,
        id = html_escape(&event.id),
        kind = html_escape(&event.event_type),
        title = html_escape(&event.title),
        time = html_escape(&event.time_text),
        icon = event.icon.as_str(),
        location = html_escape(&event.location_text),
    )
}

fn event_list(heading: &str, events: &[EventSummary], empty: &str) -> String {
    let rows = if events.is_empty() {
        format!(r#"<p class="empty">{empty}</p>"#)
    } else {
        events.iter().map(event_row).collect()
    };
    format!(r#"<section class="event-list"><h2>{heading}</h2>{rows}</section>"#)
}

/// Renders the events listing.
pub fn events_page(site_name: &str, page: &EventsPage) -> String {
    let body = format!(
        "{}{}",
        event_list("Upcoming Events", &page.upcoming, "No upcoming events."),
        event_list("Past Events", &page.past, "No past events.")
    );
    layout(site_name, &format!("Events \u{2013} {site_name}"), &body)
}

/// Renders the event detail page.
pub fn event_page(site_name: &str, page: &EventPage) -> String {
    let event = &page.event;
    let state = &page.state;

    let mut body = format!(
        r#"<section class="event"><header><a class="back" href="{EVENTS_PATH}">Back</a><div class="event-type">{kind}</div></header><h1>{title}</h1><div class="event-meta"><span class="icon icon-{icon}"></span><span class="location">{location}</span><span class="icon icon-schedule"></span><span class="time">{time}</span></div>"#,
        kind = html_escape(&page.event_type_header),
        title = html_escape(&event.title),
        icon = state.icon.as_str(),
        location = html_escape(&state.location_text),
        time = html_escape(&page.time_text),
    );
    body.push_str(&action_area(&state.buttons));
    body.push_str(&format!(
        r#"<div class="description">{}</div>"#,
        html_escape(&event.description)
    ));
    if !event.is_social() {
        body.push_str(&format!(
            r#"<div class="presenters"><h2>Presented by:</h2>{}</div>"#,
            cards(&page.presenters)
        ));
    }
    if let Some(image) = event.image_link() {
        body.push_str(&format!(
            r#"<div class="flyer"><h2>Flyer:</h2><img src="{}" alt=""></div>"#,
            html_escape(image)
        ));
    }
    body.push_str(&permalink(&page.share_url));
    body.push_str("</section>");

    layout(site_name, &page.page_title(site_name), &body)
}

/// The event's public URL in a read-only field, ready to copy.
fn permalink(url: &str) -> String {
    format!(
        r#"<div class="share"><label for="permalink">Permalink</label><input id="permalink" readonly value="{}"></div>"#,
        html_escape(url)
    )
}

/// Renders the projects placeholder. Demos are loaded but not listed yet.
pub fn projects_page(site_name: &str, _demos: &[ProjectDemo]) -> String {
    let body = r#"<section class="projects"><div class="coming-soon">Coming Soon</div></section>"#;
    layout(site_name, &format!("Projects \u{2013} {site_name}"), body)
}

/// Renders a 404 page.
pub fn not_found_page(site_name: &str) -> String {
    let body = format!(
        r#"<section class="not-found"><h1>Page not found</h1><a href="{EVENTS_PATH}">Back to events</a></section>"#
    );
    layout(site_name, &format!("Not Found \u{2013} {site_name}"), &body)
}

/// Renders a 500 page.
pub fn error_page() -> String {
    let body = r#"<section class="error"><h1>Something went wrong</h1><p>Please try again later.</p></section>"#;
    layout(
        FALLBACK_SITE_NAME,
        &format!("Error \u{2013} {FALLBACK_SITE_NAME}"),
        body,
    )
}
