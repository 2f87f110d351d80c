mod candidates;
mod initials;
mod resolution;

pub use candidates::{derive_candidates, CandidateList};
pub use initials::initials;
pub use resolution::{Exhaustion, ImageResolution, ImageView, ResolutionState};
