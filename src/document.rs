//! Source document discovery and name-derived attributes. A [`Document`] is
//! identified by its sanitized file name; the display title, output file
//! name, and archive grouping key are all derived from that identifier.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const MARKDOWN_EXTENSION: &str = ".md";
pub const HTML_EXTENSION: &str = ".html";

/// Width of the `YYYY-MM-DD-` prefix on document identifiers.
const DATE_PREFIX_LEN: usize = 11;

/// Width of the coarse grouping key (the year).
const YEAR_KEY_LEN: usize = 4;

/// A single source document, identified by its file name. Identifiers sort
/// lexicographically, so the date prefix makes reverse order mean newest
/// first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
}

impl Document {
    pub fn new(file_name: impl Into<String>) -> Self {
        Document {
            file_name: file_name.into(),
        }
    }

    /// The identifier without its markdown extension.
    pub fn base_name(&self) -> &str {
        self.file_name
            .strip_suffix(MARKDOWN_EXTENSION)
            .unwrap_or(&self.file_name)
    }

    /// The file name of the document's rendered page.
    pub fn html_file_name(&self) -> String {
        format!("{}{}", self.base_name(), HTML_EXTENSION)
    }

    /// The display title: the slug segment after the date prefix with
    /// hyphens replaced by spaces and each word capitalized. Identifiers
    /// too short to carry a date prefix are titled whole.
    pub fn title(&self) -> String {
        let base = self.base_name();
        let slug = base
            .get(DATE_PREFIX_LEN..)
            .filter(|slug| !slug.is_empty())
            .unwrap_or(base);
        slug.split('-')
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The coarse archive grouping key, conventionally the year.
    pub fn year_key(&self) -> &str {
        self.file_name.get(..YEAR_KEY_LEN).unwrap_or(&self.file_name)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// The sanitized form of a source file name: every space becomes a hyphen.
pub fn sanitized_name(name: &str) -> String {
    name.replace(' ', "-")
}

/// Renames every entry in `dir` whose name contains spaces. A second pass
/// over an already-sanitized directory renames nothing. Returns the number
/// of files renamed.
pub fn sanitize_file_names(dir: &Path) -> Result<usize> {
    let mut renamed = 0;
    for entry in fs::read_dir(dir)
        .with_context(|| format!("scanning source directory `{}`", dir.display()))?
    {
        let entry = entry?;
        let os_file_name = entry.file_name();
        let file_name = os_file_name.to_string_lossy();
        let sanitized = sanitized_name(&file_name);
        if sanitized != file_name {
            fs::rename(entry.path(), dir.join(&sanitized)).with_context(|| {
                format!("renaming `{}` to `{}`", file_name, sanitized)
            })?;
            renamed += 1;
        }
    }
    Ok(renamed)
}

/// Scans `dir` (non-recursively) and returns the documents ordered
/// descending by identifier, i.e. newest first. Dotfiles and files without
/// the markdown extension are skipped.
pub fn load_documents(dir: &Path) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("scanning source directory `{}`", dir.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let os_file_name = entry.file_name();
        let file_name = os_file_name.to_string_lossy();
        if file_name.ends_with(MARKDOWN_EXTENSION) && !file_name.starts_with('.') {
            documents.push(Document::new(file_name.into_owned()));
        }
    }
    documents.sort_by(|a, b| b.file_name.cmp(&a.file_name));
    Ok(documents)
}
