//! Hyperlink interception.
//!
//! Links whose href starts with `/` or `#` stay inside the preview and go
//! through navigation history. Everything else keeps its default behavior,
//! which in a terminal means handing the URL to the system browser.

/// What to do with a clicked link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDisposition {
    /// Navigate the preview to this path
    Internal(String),
    /// Leave to default handling (open externally)
    External(String),
    /// No href; nothing happens
    Ignore,
}

/// Classify an href the way the preview content click handler does
pub fn classify_href(href: Option<&str>) -> LinkDisposition {
    match href {
        None | Some("") => LinkDisposition::Ignore,
        Some(href) if href.starts_with('/') || href.starts_with('#') => {
            LinkDisposition::Internal(href.to_string())
        }
        Some(href) => LinkDisposition::External(href.to_string()),
    }
}
