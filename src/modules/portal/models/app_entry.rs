use serde::{Deserialize, Serialize};

pub const DEFAULT_APP_ICON: &str = "fa-solid fa-cube";

/// One application link as written in the portal document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Combined contact field: URL, `mailto:` link or bare email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AppEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon: None,
            url: None,
            contact: None,
            contact_url: None,
            contact_email: None,
            email: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn icon_or_default(&self) -> &str {
        non_blank(&self.icon).unwrap_or(DEFAULT_APP_ICON)
    }

    /// Launch target, if the entry has a usable URL
    pub fn launch_url(&self) -> Option<&str> {
        non_blank(&self.url)
    }

    pub fn has_contact_info(&self) -> bool {
        [&self.contact, &self.contact_url, &self.contact_email, &self.email]
            .into_iter()
            .any(|field| non_blank(field).is_some())
    }

    /// Resolve the contact link.
    ///
    /// Precedence: `contact`, `contact_url`, `contact_email`, `email`. A bare
    /// email address in `contact` becomes a `mailto:` link. Returns `"#"`
    /// when nothing is set.
    pub fn contact_href(&self) -> String {
        if let Some(contact) = non_blank(&self.contact) {
            if contact.starts_with("http://")
                || contact.starts_with("https://")
                || contact.starts_with("mailto:")
            {
                return contact.to_string();
            }
            if looks_like_email(contact) {
                return format!("mailto:{}", contact);
            }
            return contact.to_string();
        }

        if let Some(url) = non_blank(&self.contact_url) {
            return url.to_string();
        }
        if let Some(email) = non_blank(&self.contact_email).or_else(|| non_blank(&self.email)) {
            return format!("mailto:{}", email);
        }

        "#".to_string()
    }
}

/// App as served to front ends, with icon, color and links resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCard {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub icon_color: String,
    pub launch_url: Option<String>,
    pub contact_href: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// `user@host.tld`: an `@` followed by a domain part containing a dot
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}
