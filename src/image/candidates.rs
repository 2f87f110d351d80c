use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered URLs that may serve the same image, most preferred first. Never empty.
pub type CandidateList = Vec<Box<str>>;

static SHARE_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/d/(?P<id>[^/]+)").unwrap());

/// Derive direct-access URLs from a file-sharing link.
///
/// Links with a `/d/{id}` segment expand to a thumbnail host, a download proxy and a view
/// proxy for the same file. Anything else comes back as the only candidate, unchanged.
pub fn derive_candidates(link: &str) -> CandidateList {
    match SHARE_ID_RE.captures(link).and_then(|cap| cap.name("id")) {
        Some(id) => {
            let id = id.as_str();
            vec![
                format!("https://lh3.googleusercontent.com/d/{id}=s800").into_boxed_str(),
                format!("https://drive.google.com/uc?export=download&id={id}").into_boxed_str(),
                format!("https://drive.google.com/uc?export=view&id={id}").into_boxed_str(),
            ]
        }
        None => vec![link.into()],
    }
}
