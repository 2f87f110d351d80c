use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Format, Toml};
use figment::Figment;
use serde::Deserialize;

use crate::error::PortfolioError;

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Publication {
    pub title: String,
    pub authors: String,
    pub venue: String,
    pub year: i32,
    #[serde(default, rename = "abstract")]
    pub summary: Option<String>,
    /// Share link, resolved like the headshot
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Everything shown on the page
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub name: String,
    /// "Role, Affiliation"
    pub title_line: String,
    /// Markdown paragraphs
    #[serde(default)]
    pub intro: Vec<String>,
    #[serde(default)]
    pub headshot: Option<String>,
    pub email: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Markdown
    #[serde(default)]
    pub contact: String,
}

impl Portfolio {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let portfolio: Self = Figment::new()
            .merge(Toml::file(path))
            .extract()
            .with_context(|| format!("Error reading content from {}", path.display()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), PortfolioError> {
        if self.name.trim().is_empty() {
            return Err(PortfolioError::EmptyName);
        }
        if !self.email.contains('@') {
            return Err(PortfolioError::BadEmail(self.email.as_str().into()));
        }
        Ok(())
    }

    /// Split the title line at its first comma
    pub fn role_and_affiliation(&self) -> (&str, &str) {
        match self.title_line.split_once(',') {
            Some((role, affiliation)) => (role.trim(), affiliation.trim()),
            None => (self.title_line.trim(), ""),
        }
    }

    pub fn headshot_link(&self) -> &str {
        self.headshot.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
pub(crate) mod test {
    use figment::Jail;

    use super::*;

    pub(crate) static CONTENT: &str = r#"
        name = "Aman Arora"
        title_line = "Research Assistant, TRAIL Lab, University at Buffalo"
        intro = ["Currently, I am a **Research Assistant**."]
        headshot = "https://drive.google.com/file/d/16SVARaczokcH2TlzPPJ7i49I_fFIYK6_/view?usp=sharing"
        email = "amanaror@buffalo.edu"
        contact = "Email works best."

        [[links]]
        label = "LinkedIn"
        href = "https://www.linkedin.com/in/amanarora012/"

        [[links]]
        label = "Email"
        href = "mailto:amanaror@buffalo.edu"

        [[publications]]
        title = "Dynamics Aware Quadrupedal Locomotion via Intrinsic Dynamics Head"
        authors = "Aman Arora, Nalini Ratha"
        venue = "ICRA 2026 (submitted)"
        year = 2026
        abstract = "Jointly train an Intrinsic Dynamics head."
        thumbnail = "https://drive.google.com/file/d/1Tr7DSxaGXjPye5tVuQ0cBOy0VBZNR2Uu/view?usp=sharing"
        links = [
            { label = "PDF", href = "https://drive.google.com/file/d/1ilrEBdq0uFbdDfPfmxuh_NAE8xCnpokK/view" },
            { label = "Video", href = "https://drive.google.com/file/d/1Pdmdwzdx3ISgZe7OwYl2m9N9O-oGgrsP/view" },
        ]

        [[projects]]
        title = "Robust Quadrupedal Locomotion"
        thumbnail = "https://drive.google.com/file/d/1ttnWZUAJ2XYGaw-IehB2WCQjKn6lXdE8/view?usp=sharing"
        tags = "RL · Locomotion"
        summary = "Proprioception-only controller."
        links = [{ label = "Video", href = "https://youtu.be/R3Vqfxzi2TE" }]
    "#;

    pub(crate) fn portfolio() -> Portfolio {
        Figment::new()
            .merge(Toml::string(CONTENT))
            .extract()
            .unwrap()
    }

    #[test]
    fn load() {
        Jail::expect_with(|jail| {
            jail.create_file("content.toml", CONTENT)?;
            let portfolio = Portfolio::load("content.toml").unwrap();
            assert_eq!("Aman Arora", portfolio.name);
            assert_eq!(2, portfolio.links.len());
            assert_eq!(1, portfolio.publications.len());
            assert_eq!(2026, portfolio.publications[0].year);
            assert_eq!(
                Some("Jointly train an Intrinsic Dynamics head."),
                portfolio.publications[0].summary.as_deref()
            );
            assert_eq!(Some("RL · Locomotion"), portfolio.projects[0].tags.as_deref());
            Ok(())
        });
    }

    #[test]
    fn missing_file() {
        Jail::expect_with(|_jail| {
            let err = Portfolio::load("nope.toml").unwrap_err();
            assert!(err.to_string().contains("nope.toml"));
            Ok(())
        });
    }

    #[test]
    fn invalid_content() {
        Jail::expect_with(|jail| {
            jail.create_file("content.toml", "name = \"\"\ntitle_line = \"x\"\nemail = \"a@b\"")?;
            let err = Portfolio::load("content.toml").unwrap_err();
            assert!(matches!(
                err.downcast_ref::<PortfolioError>(),
                Some(PortfolioError::EmptyName)
            ));
            Ok(())
        });
    }

    #[test]
    fn bad_email() {
        let mut portfolio = portfolio();
        portfolio.email = "nobody".into();
        assert!(matches!(
            portfolio.validate(),
            Err(PortfolioError::BadEmail(_))
        ));
    }

    #[test]
    fn title_line() {
        let mut portfolio = portfolio();
        assert_eq!(
            ("Research Assistant", "TRAIL Lab, University at Buffalo"),
            portfolio.role_and_affiliation()
        );
        portfolio.title_line = "Student".into();
        assert_eq!(("Student", ""), portfolio.role_and_affiliation());
    }

    #[test]
    fn missing_headshot() {
        let mut portfolio = portfolio();
        portfolio.headshot = None;
        assert_eq!("", portfolio.headshot_link());
    }
}
