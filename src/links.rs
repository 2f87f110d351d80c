use tracing::debug;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Same-page `#id`
    Anchor,
    Mail,
    External,
}

impl LinkKind {
    pub fn of(href: &str) -> Self {
        if href.starts_with('#') {
            Self::Anchor
        } else if href.starts_with("mailto:") {
            Self::Mail
        } else {
            if let Err(e) = Url::parse(href) {
                debug!("external link {} is not an absolute url: {}", href, e);
            }
            Self::External
        }
    }

    /// `target` attribute for the rendered anchor
    pub fn target(self) -> Option<&'static str> {
        match self {
            Self::External => Some("_blank"),
            _ => None,
        }
    }

    /// `rel` attribute for the rendered anchor
    pub fn rel(self) -> Option<&'static str> {
        match self {
            Self::External => Some("noreferrer"),
            _ => None,
        }
    }
}
