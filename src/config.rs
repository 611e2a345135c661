//! Site configuration and the fixed filesystem layout. The directory names
//! and root-level file names are constants; the author-facing settings come
//! from an optional `site.yaml` at the project root, with every field
//! defaulting so the file may be omitted entirely.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

pub const CSS_DIR: &str = "css";
pub const DRAFTS_DIR: &str = "drafts";
pub const PAGES_DIR: &str = "html";
pub const IMAGES_DIR: &str = "img";
pub const SOURCE_DIR: &str = "md";

/// Directories created at the project root when absent.
pub const DEFAULT_DIRECTORIES: [&str; 5] =
    [CSS_DIR, DRAFTS_DIR, PAGES_DIR, IMAGES_DIR, SOURCE_DIR];

pub const STYLESHEET_FILE: &str = "styles.css";
pub const INDEX_FILE: &str = "index.html";
pub const ARCHIVE_SOURCE_FILE: &str = "archive.md";
pub const ARCHIVE_HTML_FILE: &str = "archive.html";
pub const ABOUT_FILE: &str = "about.html";
pub const CONFIG_FILE: &str = "site.yaml";

/// Author-facing settings substituted into every rendered page.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub title: String,
    pub author: String,
    pub copyright: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            title: "chronica".to_owned(),
            author: String::new(),
            copyright: String::new(),
        }
    }
}

/// Everything one build pass needs: the project root, the parsed site
/// settings, and whether missing required inputs may be synthesized from
/// built-in defaults instead of aborting.
pub struct Config {
    pub root: PathBuf,
    pub site: SiteConfig,
    pub create_defaults: bool,
}

impl Config {
    pub fn load(root: &Path, create_defaults: bool) -> Result<Config> {
        let path = root.join(CONFIG_FILE);
        let site = if path.exists() {
            let file = File::open(&path)
                .with_context(|| format!("opening config file `{}`", path.display()))?;
            serde_yaml::from_reader(file)
                .with_context(|| format!("parsing config file `{}`", path.display()))?
        } else {
            SiteConfig::default()
        };
        Ok(Config {
            root: root.to_owned(),
            site,
            create_defaults,
        })
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.root.join(PAGES_DIR)
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.root.join(CSS_DIR).join(STYLESHEET_FILE)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    pub fn archive_source_path(&self) -> PathBuf {
        self.root.join(ARCHIVE_SOURCE_FILE)
    }

    pub fn archive_html_path(&self) -> PathBuf {
        self.root.join(ARCHIVE_HTML_FILE)
    }
}
