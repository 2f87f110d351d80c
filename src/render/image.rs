use maud::{html, Markup};
use serde_json::Value;

use super::script::ON_ERROR;
use crate::image::{Exhaustion, ImageResolution};

fn candidates_json(resolution: &ImageResolution) -> String {
    Value::from(
        resolution
            .candidates()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>(),
    )
    .to_string()
}

/// `<img>` for the first candidate, carrying the rest of the chain for the fallback script
pub fn image(resolution: &ImageResolution, class: &str, alt: &str) -> Markup {
    let fallback = match resolution.exhaustion() {
        Exhaustion::Initials(text) => Some(&**text),
        Exhaustion::KeepLast => None,
    };
    html! {
        img class=(class)
            src=(resolution.current())
            alt=(alt)
            data-candidates=(candidates_json(resolution))
            data-fallback=[fallback]
            onerror=(ON_ERROR);
    }
}

pub fn headshot(link: &str, name: &str) -> Markup {
    image(
        &ImageResolution::headshot(link, name),
        "headshot",
        &format!("{name} headshot"),
    )
}

pub fn thumbnail(link: &str, title: &str) -> Markup {
    image(
        &ImageResolution::thumbnail(link),
        "proj-thumb",
        &format!("{title} thumbnail"),
    )
}
