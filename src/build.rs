//! Exports the [`build_site`] function which stitches together the
//! high-level steps of one full-site regeneration: verifying the directory
//! layout, seeding missing required inputs, sanitizing and ordering the
//! source documents ([`crate::document`]), rendering every page with its
//! navigation links ([`crate::nav`], [`crate::template`]), and emitting the
//! grouped archive ([`crate::archive`]).

use crate::archive::{archive_markdown, group_documents};
use crate::config::{Config, ARCHIVE_SOURCE_FILE, DEFAULT_DIRECTORIES};
use crate::document::{load_documents, sanitize_file_names, Document, MARKDOWN_EXTENSION};
use crate::log;
use crate::markdown;
use crate::nav::{self, Location, NavLinks};
use crate::template::{link_markup, render_page, starter_document, PageContext, DEFAULT_STYLESHEET, NEXT_LABEL, PREV_LABEL};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// What one build pass produced, for the closing log line.
#[derive(Debug)]
pub struct BuildSummary {
    pub documents: usize,
    pub groups: usize,
}

/// Regenerates the whole site under `config.root`. All-or-nothing in
/// intent: any I/O failure aborts the pass, and there is no partial-output
/// guarantee beyond what was already written.
pub fn build_site(config: &Config) -> Result<BuildSummary> {
    ensure_directories(config)?;
    seed_missing_inputs(config)?;

    let renamed = sanitize_file_names(&config.source_dir())?;
    if renamed > 0 {
        log!("build"; "sanitized {renamed} file name(s)");
    }

    let documents = load_documents(&config.source_dir())?;
    if documents.is_empty() {
        bail!(
            "no markdown documents in `{}`; add a post or rerun with --create-defaults",
            config.source_dir().display()
        );
    }

    for (pos, document) in documents.iter().enumerate() {
        render_document(config, &documents, pos, document)?;
    }

    let groups = group_documents(&documents);
    let group_count = groups.len();
    write_archive(config, &documents, &archive_markdown(&groups))?;

    Ok(BuildSummary {
        documents: documents.len(),
        groups: group_count,
    })
}

fn ensure_directories(config: &Config) -> Result<()> {
    for dir in DEFAULT_DIRECTORIES {
        let path = config.root.join(dir);
        if !path.exists() {
            log!("build"; "creating missing directory `{}`", path.display());
            fs::create_dir_all(&path)
                .with_context(|| format!("creating directory `{}`", path.display()))?;
        }
    }
    Ok(())
}

/// Checks the two required inputs (at least one markdown source, the
/// stylesheet) and either synthesizes the built-in default or aborts,
/// depending on `config.create_defaults`.
fn seed_missing_inputs(config: &Config) -> Result<()> {
    let source_dir = config.source_dir();
    if !has_markdown_sources(&source_dir)? {
        if !config.create_defaults {
            bail!(
                "no markdown documents in `{}`; add a post or rerun with --create-defaults",
                source_dir.display()
            );
        }
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        let path = source_dir.join(format!("{today}-welcome{MARKDOWN_EXTENSION}"));
        fs::write(&path, starter_document(&config.site.title, &today))
            .with_context(|| format!("writing starter document `{}`", path.display()))?;
        log!("build"; "created starter document `{}`", path.display());
    }

    let stylesheet = config.stylesheet_path();
    if !stylesheet.exists() {
        if !config.create_defaults {
            bail!(
                "stylesheet `{}` is missing; create one or rerun with --create-defaults",
                stylesheet.display()
            );
        }
        fs::write(&stylesheet, DEFAULT_STYLESHEET)
            .with_context(|| format!("writing stylesheet `{}`", stylesheet.display()))?;
        log!("build"; "created default stylesheet `{}`", stylesheet.display());
    }

    Ok(())
}

fn has_markdown_sources(dir: &Path) -> Result<bool> {
    for entry in fs::read_dir(dir)
        .with_context(|| format!("scanning source directory `{}`", dir.display()))?
    {
        let entry = entry?;
        let os_file_name = entry.file_name();
        let file_name = os_file_name.to_string_lossy();
        if file_name.ends_with(MARKDOWN_EXTENSION) && !file_name.starts_with('.') {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Renders the document at `pos` and writes it to its role-determined
/// target: the root index path for position 0, the rendered-pages directory
/// otherwise.
fn render_document(
    config: &Config,
    seq: &[Document],
    pos: usize,
    document: &Document,
) -> Result<()> {
    let source_path = config.source_dir().join(&document.file_name);
    let source = fs::read_to_string(&source_path)
        .with_context(|| format!("reading `{}`", source_path.display()))?;

    let location = nav::document_location(pos);
    let links = nav::nav_links(seq, pos);
    let page = assemble_page(
        config,
        location,
        &document.title(),
        &links,
        &nav::source_href(location, &document.file_name),
        &markdown::to_html(&source),
    );

    let target = match location {
        Location::Root => config.index_path(),
        Location::Pages => config.pages_dir().join(document.html_file_name()),
    };
    fs::write(&target, page).with_context(|| format!("writing `{}`", target.display()))?;
    Ok(())
}

/// Emits the archive twice: the generated markdown source at the root and
/// the rendered page next to it.
fn write_archive(config: &Config, seq: &[Document], listing: &str) -> Result<()> {
    let source_path = config.archive_source_path();
    fs::write(&source_path, listing)
        .with_context(|| format!("writing `{}`", source_path.display()))?;

    let page = assemble_page(
        config,
        Location::Root,
        "Archive",
        &nav::archive_nav(seq),
        ARCHIVE_SOURCE_FILE,
        &markdown::to_html(listing),
    );
    let target = config.archive_html_path();
    fs::write(&target, page).with_context(|| format!("writing `{}`", target.display()))?;
    Ok(())
}

fn assemble_page(
    config: &Config,
    location: Location,
    title: &str,
    links: &NavLinks,
    source_href: &str,
    body: &str,
) -> String {
    let prev_link = link_markup(PREV_LABEL, links.prev.as_deref());
    let next_link = link_markup(NEXT_LABEL, links.next.as_deref());
    let stylesheet_href = nav::stylesheet_href(location);
    let index_href = nav::index_href(location);
    let archive_href = nav::archive_href(location);
    let about_href = nav::about_href(location);

    render_page(
        &PageContext {
            site_title: &config.site.title,
            page_title: title,
            author: &config.site.author,
            copyright: &config.site.copyright,
            stylesheet_href: &stylesheet_href,
            index_href: &index_href,
            archive_href: &archive_href,
            about_href: &about_href,
            prev_link: &prev_link,
            next_link: &next_link,
            source_href,
        },
        body,
    )
}
