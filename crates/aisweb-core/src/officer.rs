//! Officer records and the display-ready card built from them.

use serde::{Deserialize, Serialize};

use crate::event::null_as_default;
use crate::links::{SocialLinkNormalizer, SocialPlatform};

/// Photo shown when an officer has no image.
pub const DEFAULT_PHOTO: &str = "/default_photo.svg";

/// Title given to presenters who are not officers.
pub const PRESENTER_TITLE: &str = "Presenter";

/// An officer (or presenter) as authored in the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Officer {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linked_in_url: Option<String>,
    #[serde(default)]
    pub personal_web: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
}

impl Officer {
    /// Creates an officer with only a name and title.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            image: None,
            email: None,
            github: None,
            linked_in_url: None,
            personal_web: None,
            quote: None,
        }
    }

    /// Stand-in record for a presenter with no officer entry.
    pub fn presenter_placeholder(name: impl Into<String>) -> Self {
        Self::new(name, PRESENTER_TITLE)
    }

    /// Builder method to set the image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Builder method to set the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builder method to set the raw GitHub field.
    pub fn with_github(mut self, github: impl Into<String>) -> Self {
        self.github = Some(github.into());
        self
    }

    /// Builder method to set the raw LinkedIn field.
    pub fn with_linkedin(mut self, linkedin: impl Into<String>) -> Self {
        self.linked_in_url = Some(linkedin.into());
        self
    }

    /// Builder method to set the raw personal website field.
    pub fn with_personal_web(mut self, site: impl Into<String>) -> Self {
        self.personal_web = Some(site.into());
        self
    }

    /// Builder method to set the quote.
    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = Some(quote.into());
        self
    }
}

/// The kind of contact link on an officer card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    GitHub,
    LinkedIn,
    Website,
}

impl ContactKind {
    /// Returns the icon identifier for this contact.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::GitHub => "github",
            Self::LinkedIn => "linkedin",
            Self::Website => "language",
        }
    }

    /// Returns true if the link opens in a new tab.
    pub fn opens_new_tab(&self) -> bool {
        !matches!(self, Self::Email)
    }
}

/// A resolved contact link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub href: String,
}

/// A display-ready officer card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficerCard {
    pub name: String,
    pub title: String,
    /// The officer's photo, or [`DEFAULT_PHOTO`].
    pub image_src: String,
    /// Whether `image_src` is the fallback photo.
    pub is_default_photo: bool,
    /// Contact links in display order: email, GitHub, LinkedIn, website.
    pub contacts: Vec<ContactLink>,
    pub quote: Option<String>,
}

impl OfficerCard {
    /// Builds a card, normalizing every social field.
    ///
    /// Empty or unusable fields are left off the card.
    pub fn from_officer(officer: &Officer) -> Self {
        let normalizer = SocialLinkNormalizer::new();
        let non_empty = |value: &Option<String>| -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let mut contacts = Vec::new();
        if let Some(email) = non_empty(&officer.email) {
            contacts.push(ContactLink {
                kind: ContactKind::Email,
                href: format!("mailto:{email}"),
            });
        }
        if let Some(href) = officer
            .github
            .as_deref()
            .and_then(|raw| normalizer.profile(SocialPlatform::GitHub, raw))
        {
            contacts.push(ContactLink {
                kind: ContactKind::GitHub,
                href,
            });
        }
        if let Some(href) = officer
            .linked_in_url
            .as_deref()
            .and_then(|raw| normalizer.profile(SocialPlatform::LinkedIn, raw))
        {
            contacts.push(ContactLink {
                kind: ContactKind::LinkedIn,
                href,
            });
        }
        if let Some(href) = officer
            .personal_web
            .as_deref()
            .and_then(|raw| normalizer.personal_site(raw))
        {
            contacts.push(ContactLink {
                kind: ContactKind::Website,
                href,
            });
        }

        let image = non_empty(&officer.image);
        Self {
            name: officer.name.clone(),
            title: officer.title.clone(),
            is_default_photo: image.is_none(),
            image_src: image.unwrap_or_else(|| DEFAULT_PHOTO.to_string()),
            contacts,
            quote: non_empty(&officer.quote),
        }
    }

    /// Returns the contact link of the given kind, if present.
    pub fn contact(&self, kind: ContactKind) -> Option<&ContactLink> {
        self.contacts.iter().find(|c| c.kind == kind)
    }
}
