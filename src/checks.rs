use std::fmt::Display;

use itertools::Itertools;
use maud::html;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::content::Portfolio;
use crate::render::NAV;

static NAV_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<nav>(?P<inner>.*?)</nav>").unwrap());
static ANCHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<a [^>]*>(?P<label>[^<]*)</a>").unwrap());

const REQUIRED_IDS: [&str; 4] = ["top", "publications", "projects", "contact"];
const MIN_YEAR: i32 = 2024;

#[derive(Debug, PartialEq, Eq)]
pub enum CheckFailure {
    MissingSection(&'static str),
    NavOrder(Box<str>),
    Year(i32),
    PublicationCount { rendered: usize, expected: usize },
    ProjectCount { rendered: usize, expected: usize },
    NoHeadshot,
    NoPublicationThumbnail,
    NoProjectThumbnail,
    Mailto,
    MissingLink(Box<str>),
}

impl Display for CheckFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSection(id) => write!(f, "Missing section id: {}", id),
            Self::NavOrder(found) => write!(f, "Unexpected nav order: {}", found),
            Self::Year(year) => write!(f, "Year seems off: {}", year),
            Self::PublicationCount { rendered, expected } => {
                write!(f, "Publications mismatch: page={} content={}", rendered, expected)
            }
            Self::ProjectCount { rendered, expected } => {
                write!(f, "Projects mismatch: page={} content={}", rendered, expected)
            }
            Self::NoHeadshot => write!(f, "Headshot should render"),
            Self::NoPublicationThumbnail => write!(f, "Expected a research thumbnail image"),
            Self::NoProjectThumbnail => write!(f, "Expected a project thumbnail image"),
            Self::Mailto => write!(f, "Contact mailto link does not use the configured email"),
            Self::MissingLink(href) => write!(f, "Expected intro link to be present: {}", href),
        }
    }
}

fn escaped(text: &str) -> String {
    html! { (text) }.into_string()
}

/// Part of the page between `id="{id}"` and the next landmark
fn section<'a>(page: &'a str, id: &str, end: &str) -> &'a str {
    let Some(start) = page.find(&format!("id=\"{id}\"")) else {
        return "";
    };
    let rest = &page[start..];
    match rest.find(end) {
        Some(len) => &rest[..len],
        None => rest,
    }
}

/// Consistency checks between the content and the generated page
pub fn run(portfolio: &Portfolio, page: &str, year: i32) -> Vec<CheckFailure> {
    let mut failures = Vec::new();

    for id in REQUIRED_IDS {
        if !page.contains(&format!("id=\"{id}\"")) {
            failures.push(CheckFailure::MissingSection(id));
        }
    }

    let nav = NAV_RE
        .captures(page)
        .and_then(|cap| cap.name("inner"))
        .map(|inner| {
            ANCHOR_RE
                .captures_iter(inner.as_str())
                .filter_map(|cap| cap.name("label"))
                .map(|label| label.as_str().trim())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    if !nav.iter().copied().eq(NAV.iter().map(|(label, _)| *label)) {
        failures.push(CheckFailure::NavOrder(nav.iter().join(", ").into_boxed_str()));
    }

    if year < MIN_YEAR {
        failures.push(CheckFailure::Year(year));
    }

    let publications = section(page, "publications", "id=\"projects\"");
    let projects = section(page, "projects", "id=\"contact\"");
    let contact = section(page, "contact", "<footer>");

    let rendered = publications.matches("class=\"pub-item\"").count();
    if rendered != portfolio.publications.len() {
        failures.push(CheckFailure::PublicationCount {
            rendered,
            expected: portfolio.publications.len(),
        });
    }
    let rendered = projects.matches("class=\"proj-item\"").count();
    if rendered != portfolio.projects.len() {
        failures.push(CheckFailure::ProjectCount {
            rendered,
            expected: portfolio.projects.len(),
        });
    }

    if !page.contains("class=\"headshot\"") {
        failures.push(CheckFailure::NoHeadshot);
    }
    if portfolio.publications.iter().any(|p| p.thumbnail.is_some())
        && !publications.contains("class=\"proj-thumb\"")
    {
        failures.push(CheckFailure::NoPublicationThumbnail);
    }
    if portfolio.projects.iter().any(|p| p.thumbnail.is_some())
        && !projects.contains("class=\"proj-thumb\"")
    {
        failures.push(CheckFailure::NoProjectThumbnail);
    }

    let mailto = format!("href=\"{}\"", escaped(&format!("mailto:{}", portfolio.email)));
    if !contact.contains(&mailto) {
        failures.push(CheckFailure::Mailto);
    }

    for link in &portfolio.links {
        if !page.contains(&format!("href=\"{}\"", escaped(&link.href))) {
            failures.push(CheckFailure::MissingLink(link.href.as_str().into()));
        }
    }

    failures
}

/// Log every failure, returning how many there were
pub fn report(failures: &[CheckFailure]) -> usize {
    if failures.is_empty() {
        info!("page checks: render OK");
    }
    for failure in failures {
        warn!("page check failed: {}", failure);
    }
    failures.len()
}
