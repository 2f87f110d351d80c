mod image;
mod script;
mod style;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::content::{Link, Portfolio, Project, Publication};
use crate::links::LinkKind;

/// Header navigation, in display order
pub const NAV: [(&str, &str); 3] = [
    ("Research", "#publications"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

static MD_ANCHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a href=(?P<q>['"])(?P<href>[^'"]*)['"]"#).unwrap());

/// Markdown paragraph, with link attributes added the same way as for [`link`]
fn md(text: &str) -> Markup {
    let html = markdown::to_html(text);
    let html = MD_ANCHOR_RE.replace_all(&html, |cap: &Captures| {
        let kind = LinkKind::of(&cap["href"]);
        match (kind.target(), kind.rel()) {
            (Some(target), Some(rel)) => format!(
                "{} target={q}{}{q} rel={q}{}{q}",
                &cap[0],
                target,
                rel,
                q = &cap["q"]
            ),
            _ => cap[0].to_string(),
        }
    });
    PreEscaped(html.into_owned())
}

fn link(l: &Link) -> Markup {
    let kind = LinkKind::of(&l.href);
    html! {
        a href=(l.href) target=[kind.target()] rel=[kind.rel()] { (l.label) }
    }
}

fn header(portfolio: &Portfolio) -> Markup {
    let (role, affiliation) = portfolio.role_and_affiliation();
    html! {
        header {
            div.top {
                h1 #top { (portfolio.name) }
                nav {
                    @for (label, href) in NAV {
                        a href=(href) { (label) }
                    }
                }
            }
            div.intro {
                div {
                    p {
                        strong { (role) }
                        @if !affiliation.is_empty() {
                            ", " (affiliation)
                        }
                    }
                    @for paragraph in &portfolio.intro {
                        (md(paragraph))
                    }
                    div.links {
                        @for l in &portfolio.links {
                            (link(l))
                        }
                    }
                }
                (image::headshot(portfolio.headshot_link(), &portfolio.name))
            }
        }
    }
}

fn publication(p: &Publication) -> Markup {
    html! {
        li.pub-item {
            div.pub {
                @if let Some(thumb) = &p.thumbnail {
                    div style="width:120px" {
                        (image::thumbnail(thumb, &p.title))
                    }
                }
                div {
                    div { strong { (p.title) } }
                    div.tags { (p.authors) " · " (p.venue) " · " (p.year) }
                    @if let Some(summary) = &p.summary {
                        p.para style="margin-top:6px" { (summary) }
                    }
                    div.meta-links {
                        @for l in &p.links {
                            (link(l))
                        }
                    }
                }
            }
        }
    }
}

fn project(p: &Project) -> Markup {
    html! {
        li.proj-item {
            div.proj {
                @if let Some(thumb) = &p.thumbnail {
                    div.thumb-wrap.grid-photo aria-label="project photo" {
                        (image::thumbnail(thumb, &p.title))
                    }
                }
                div.proj-title aria-label="project title" { strong { (p.title) } }
                div.proj-desc aria-label="project description" {
                    @if let Some(tags) = &p.tags {
                        div.tags style="margin-bottom:4px" { (tags) }
                    }
                    @if let Some(summary) = &p.summary {
                        p.para style="margin-top:0" { (summary) }
                    }
                }
                div.proj-links aria-label="project links" {
                    @if !p.links.is_empty() {
                        div.meta-links {
                            @for l in &p.links {
                                (link(l))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Full HTML document for `portfolio`, with `year` in the footer
pub fn render_page(portfolio: &Portfolio, year: i32) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (portfolio.name) }
                style { (PreEscaped(style::CSS)) }
                script { (PreEscaped(script::FALLBACK_JS)) }
            }
            body {
                div.wrap {
                    (header(portfolio))
                    section #publications {
                        h2 { "Research" }
                        ul.list {
                            @for p in &portfolio.publications {
                                (publication(p))
                            }
                        }
                    }
                    section #projects {
                        h2 { "Projects" }
                        ul.list {
                            @for p in &portfolio.projects {
                                (project(p))
                            }
                        }
                    }
                    section #contact {
                        h2 { "Contact" }
                        div.para { (md(&portfolio.contact)) }
                        p {
                            a href={ "mailto:" (portfolio.email) } { (portfolio.email) }
                        }
                    }
                    footer {
                        div { "© " (year) " " (portfolio.name) " • Minimal academic layout." }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::content::test::portfolio;

    #[test]
    fn sections() {
        let html = render_page(&portfolio(), 2026).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Aman Arora</title>"));
        for id in ["top", "publications", "projects", "contact"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing {id}");
        }
        assert!(html.contains("<h2>Research</h2>"));
    }

    #[test]
    fn nav_order() {
        let html = render_page(&portfolio(), 2026).into_string();
        assert!(html.contains(
            "<nav><a href=\"#publications\">Research</a><a href=\"#projects\">Projects</a>\
             <a href=\"#contact\">Contact</a></nav>"
        ));
    }

    #[test]
    fn intro() {
        let html = render_page(&portfolio(), 2026).into_string();
        assert!(html.contains("<strong>Research Assistant</strong>, TRAIL Lab, University at Buffalo"));
        assert!(html.contains("<strong>Research Assistant</strong>."));
        assert!(html.contains(
            "<a href=\"https://www.linkedin.com/in/amanarora012/\" target=\"_blank\" rel=\"noreferrer\">LinkedIn</a>"
        ));
        assert!(html.contains("<a href=\"mailto:amanaror@buffalo.edu\">Email</a>"));
    }

    #[test]
    fn markdown_links() {
        let mut portfolio = portfolio();
        portfolio.intro = vec![
            "Advised by [Dr. Nalini Ratha](https://www.buffalo.edu/ratha-nalini.html).".into(),
        ];
        portfolio.contact = "Write to [me](mailto:amanaror@buffalo.edu) or see [below](#top).".into();
        let html = render_page(&portfolio, 2026).into_string();

        let external = html
            .find("https://www.buffalo.edu/ratha-nalini.html")
            .map(|start| &html[start..])
            .and_then(|rest| rest.split('>').next())
            .unwrap();
        assert!(external.contains("target='_blank'"), "{external}");
        assert!(external.contains("rel='noreferrer'"), "{external}");

        let contact = &html[html.find("id=\"contact\"").unwrap()..];
        let mail = &contact[contact.find("mailto:").unwrap()..];
        assert!(!mail.split('>').next().unwrap().contains("target="));
        let anchor = &contact[contact.find("#top").unwrap()..];
        assert!(!anchor.split('>').next().unwrap().contains("target="));
    }

    #[test]
    fn fallback_handler_precedes_images() {
        let html = render_page(&portfolio(), 2026).into_string();
        let handler = html.find("function imageFailed(img)").unwrap();
        let first_image = html.find("<img ").unwrap();
        assert!(handler < html.find("</head>").unwrap());
        assert!(handler < first_image);
        assert_eq!(
            html.matches("<img ").count(),
            html.matches("onerror=\"imageFailed(this)\"").count()
        );
    }

    #[test]
    fn items() {
        let html = render_page(&portfolio(), 2026).into_string();
        assert_eq!(1, html.matches("class=\"pub-item\"").count());
        assert_eq!(1, html.matches("class=\"proj-item\"").count());
        assert_eq!(2, html.matches("class=\"proj-thumb\"").count());
        assert!(html.contains("Aman Arora, Nalini Ratha · ICRA 2026 (submitted) · 2026"));
        assert!(html.contains("RL · Locomotion"));
    }

    #[test]
    fn footer() {
        let html = render_page(&portfolio(), 2030).into_string();
        assert!(html.contains("© 2030 Aman Arora • Minimal academic layout."));
    }

    #[test]
    fn escapes_content() {
        let mut portfolio = portfolio();
        portfolio.projects[0].title = "<script>alert(1)</script>".into();
        let html = render_page(&portfolio, 2026).into_string();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn no_thumbnail() {
        let mut portfolio = portfolio();
        portfolio.publications[0].thumbnail = None;
        portfolio.projects[0].thumbnail = None;
        let html = render_page(&portfolio, 2026).into_string();
        assert!(!html.contains("proj-thumb\""));
        assert!(html.contains("class=\"headshot\""));
    }
}
