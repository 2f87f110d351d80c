//! Static academic portfolio page generator.
//!
//! Content comes from a TOML file ([`content::Portfolio`]), is rendered to a single HTML page
//! ([`render::render_page`]) and checked for consistency ([`checks`]). Images given as
//! file-sharing links go through [`image::ImageResolution`], which derives direct URLs and
//! falls back through them, and finally to initials, when they fail to load.

pub mod checks;
pub mod config;
pub mod content;
pub mod error;
pub mod image;
pub mod links;
pub mod render;

use std::fs;

use anyhow::{Context, Result};
use time::OffsetDateTime;
use tracing::info;

use crate::config::Config;
use crate::content::Portfolio;
use crate::error::PortfolioError;

/// Load content, render, check and write the page
pub fn build(config: &Config) -> Result<()> {
    let portfolio = Portfolio::load(&config.content)?;
    info!(
        "loaded {} publication(s) and {} project(s) from {}",
        portfolio.publications.len(),
        portfolio.projects.len(),
        config.content.display()
    );

    let year = OffsetDateTime::now_utc().year();
    let page = render::render_page(&portfolio, year).into_string();

    let failed = checks::report(&checks::run(&portfolio, &page, year));
    if failed > 0 && config.strict {
        return Err(PortfolioError::ChecksFailed(failed).into());
    }

    if let Some(parent) = config.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Error creating {}", parent.display()))?;
    }
    fs::write(&config.output, page)
        .with_context(|| format!("Error writing {}", config.output.display()))?;
    info!("wrote {}", config.output.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use figment::Jail;

    use super::*;
    use crate::content::test::CONTENT;

    #[test]
    fn build_writes_page() {
        Jail::expect_with(|jail| {
            jail.create_file("content.toml", CONTENT)?;
            jail.set_env("PORTFOLIO_OUTPUT", "public/site/index.html");
            let config = Config::get_config().unwrap();
            build(&config).unwrap();

            let page = fs::read_to_string("public/site/index.html").unwrap();
            assert!(page.contains("<title>Aman Arora</title>"));
            assert!(page.contains("data-fallback=\"AA\""));
            Ok(())
        });
    }

    #[test]
    fn strict_build_passes_checks() {
        Jail::expect_with(|jail| {
            jail.create_file("content.toml", CONTENT)?;
            jail.set_env("PORTFOLIO_STRICT", "true");
            let config = Config::get_config().unwrap();
            build(&config).unwrap();
            assert!(config.output.exists());
            Ok(())
        });
    }

    #[test]
    fn missing_content() {
        Jail::expect_with(|_jail| {
            let config = Config::get_config().unwrap();
            let err = build(&config).unwrap_err();
            assert!(format!("{:#}", err).contains("content.toml"));
            assert!(!config.output.exists());
            Ok(())
        });
    }
}
