use tracing::debug;

use super::candidates::{derive_candidates, CandidateList};
use super::initials::initials;

/// What to show once every candidate failed to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exhaustion {
    /// Replace the image with the given text
    Initials(Box<str>),
    /// Keep pointing at the last candidate
    KeepLast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    Loading(usize),
    Rendered(usize),
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageView<'a> {
    Image(&'a str),
    Text(&'a str),
}

/// Load state of one displayed image.
///
/// The rendering layer owns the value and feeds load results back through
/// [`ImageResolution::on_load_failure`] and [`ImageResolution::on_load_success`], then shows
/// whatever [`ImageResolution::view`] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolution {
    candidates: CandidateList,
    cursor: usize,
    exhausted: bool,
    loaded: bool,
    exhaustion: Exhaustion,
}

impl ImageResolution {
    pub fn new(link: &str, exhaustion: Exhaustion) -> Self {
        Self::from_candidates(derive_candidates(link), exhaustion)
    }

    pub fn from_candidates(mut candidates: CandidateList, exhaustion: Exhaustion) -> Self {
        if candidates.is_empty() {
            candidates.push("".into());
        }
        Self {
            candidates,
            cursor: 0,
            exhausted: false,
            loaded: false,
            exhaustion,
        }
    }

    /// Portrait that degrades to the initials of `name`
    pub fn headshot(link: &str, name: &str) -> Self {
        Self::new(link, Exhaustion::Initials(initials(name).into_boxed_str()))
    }

    pub fn thumbnail(link: &str) -> Self {
        Self::new(link, Exhaustion::KeepLast)
    }

    pub fn candidates(&self) -> &[Box<str>] {
        &self.candidates
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn exhaustion(&self) -> &Exhaustion {
        &self.exhaustion
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn last_index(&self) -> usize {
        self.candidates.len() - 1
    }

    /// URL of the active attempt
    pub fn current(&self) -> &str {
        &self.candidates[self.cursor.min(self.last_index())]
    }

    pub fn state(&self) -> ResolutionState {
        if self.exhausted {
            ResolutionState::Fallback
        } else if self.loaded {
            ResolutionState::Rendered(self.cursor)
        } else {
            ResolutionState::Loading(self.cursor)
        }
    }

    pub fn view(&self) -> ImageView<'_> {
        match (&self.exhaustion, self.exhausted) {
            (Exhaustion::Initials(text), true) => ImageView::Text(text),
            _ => ImageView::Image(self.current()),
        }
    }

    /// Advance to the next candidate, or give up after the last one
    pub fn on_load_failure(mut self) -> Self {
        if self.loaded || self.exhausted {
            return self;
        }
        if self.cursor < self.last_index() {
            debug!("candidate {} failed: {}", self.cursor, self.current());
            self.cursor += 1;
        } else {
            debug!("all {} candidates failed", self.candidates.len());
            self.exhausted = true;
        }
        self
    }

    pub fn on_load_success(mut self) -> Self {
        if !self.exhausted {
            self.loaded = true;
        }
        self
    }
}
