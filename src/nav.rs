//! Previous/next navigation for the ordered document sequence. Position 0
//! is the newest document and lives at the site root as the index page;
//! every other document lives one directory below the root, so hrefs depend
//! on where the linking page sits.
//!
//! The boundary policy is purely positional except for three rules:
//!
//! * the newest document has no previous link;
//! * the document at position 1 links back to the index page explicitly,
//!   because position 0 is not written to the per-document path;
//! * only the oldest document routes its next link to the archive page,
//!   which is the chronological end of the site.

use crate::config::{ABOUT_FILE, ARCHIVE_HTML_FILE, CSS_DIR, INDEX_FILE, PAGES_DIR, SOURCE_DIR, STYLESHEET_FILE};
use crate::document::Document;

/// Where the page being rendered lives. Root pages (index, archive) link
/// with no prefix; pages in the rendered-pages directory need exactly one
/// `../` segment to reach root files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Root,
    Pages,
}

impl Location {
    fn up(self) -> &'static str {
        match self {
            Location::Root => "",
            Location::Pages => "../",
        }
    }
}

/// The location of the document at `pos` in the sequence.
pub fn document_location(pos: usize) -> Location {
    match pos {
        0 => Location::Root,
        _ => Location::Pages,
    }
}

/// A computed pair of navigation targets. `None` renders as a plain,
/// non-link label.
#[derive(Debug, PartialEq, Eq)]
pub struct NavLinks {
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Computes the navigation links for the document at `pos` in a non-empty
/// sequence sorted descending by identifier.
pub fn nav_links(seq: &[Document], pos: usize) -> NavLinks {
    debug_assert!(pos < seq.len());
    let from = document_location(pos);
    let last = seq.len() - 1;

    let prev = match pos {
        0 => None,
        1 => Some(index_href(from)),
        p => Some(document_href(from, &seq[p - 1])),
    };
    let next = if pos == last {
        Some(archive_href(from))
    } else {
        Some(document_href(from, &seq[pos + 1]))
    };

    NavLinks { prev, next }
}

/// The archive page's navigation: its previous link mirrors the oldest
/// document's forward link, and there is nothing after the archive.
pub fn archive_nav(seq: &[Document]) -> NavLinks {
    let prev = match seq.len() {
        0 => None,
        // a lone document is the index, not an interior page
        1 => Some(index_href(Location::Root)),
        n => Some(document_href(Location::Root, &seq[n - 1])),
    };
    NavLinks { prev, next: None }
}

/// Href to a document's rendered page: root pages link down into the pages
/// directory, interior pages link to siblings by bare file name.
pub fn document_href(from: Location, document: &Document) -> String {
    match from {
        Location::Root => format!("{}/{}", PAGES_DIR, document.html_file_name()),
        Location::Pages => document.html_file_name(),
    }
}

pub fn index_href(from: Location) -> String {
    format!("{}{}", from.up(), INDEX_FILE)
}

pub fn archive_href(from: Location) -> String {
    format!("{}{}", from.up(), ARCHIVE_HTML_FILE)
}

pub fn about_href(from: Location) -> String {
    format!("{}{}", from.up(), ABOUT_FILE)
}

pub fn stylesheet_href(from: Location) -> String {
    format!("{}{}/{}", from.up(), CSS_DIR, STYLESHEET_FILE)
}

/// Href to the markdown source of the page being rendered.
pub fn source_href(from: Location, file_name: &str) -> String {
    format!("{}{}/{}", from.up(), SOURCE_DIR, file_name)
}

#[cfg(test)]
mod test {
    use super::*;

    fn sequence(names: &[&str]) -> Vec<Document> {
        names.iter().map(|name| Document::new(*name)).collect()
    }

    fn five() -> Vec<Document> {
        sequence(&[
            "2021-05-01-e.md",
            "2021-04-01-d.md",
            "2021-03-01-c.md",
            "2021-02-01-b.md",
            "2021-01-01-a.md",
        ])
    }

    #[test]
    fn test_newest_has_no_prev_and_links_forward() {
        let seq = five();
        let links = nav_links(&seq, 0);
        assert_eq!(links.prev, None);
        assert_eq!(links.next.as_deref(), Some("html/2021-04-01-d.html"));
    }

    #[test]
    fn test_position_one_prev_is_the_index_page() {
        let seq = five();
        let links = nav_links(&seq, 1);
        assert_eq!(links.prev.as_deref(), Some("../index.html"));
        assert_eq!(links.next.as_deref(), Some("2021-03-01-c.html"));
    }

    #[test]
    fn test_interior_neighbors_are_positional() {
        let seq = five();
        let links = nav_links(&seq, 2);
        assert_eq!(links.prev.as_deref(), Some("2021-04-01-d.html"));
        assert_eq!(links.next.as_deref(), Some("2021-02-01-b.html"));
    }

    #[test]
    fn test_second_to_last_links_forward_to_the_oldest() {
        let seq = five();
        let links = nav_links(&seq, 3);
        assert_eq!(links.prev.as_deref(), Some("2021-03-01-c.html"));
        assert_eq!(links.next.as_deref(), Some("2021-01-01-a.html"));
    }

    #[test]
    fn test_only_the_oldest_routes_next_to_the_archive() {
        let seq = five();
        let links = nav_links(&seq, 4);
        assert_eq!(links.prev.as_deref(), Some("2021-02-01-b.html"));
        assert_eq!(links.next.as_deref(), Some("../archive.html"));
    }

    #[test]
    fn test_sole_document_is_index_and_links_to_archive() {
        let seq = sequence(&["2021-01-01-a.md"]);
        let links = nav_links(&seq, 0);
        assert_eq!(links.prev, None);
        assert_eq!(links.next.as_deref(), Some("archive.html"));
    }

    #[test]
    fn test_two_documents() {
        let seq = sequence(&["2021-02-01-b.md", "2021-01-01-a.md"]);
        let newest = nav_links(&seq, 0);
        assert_eq!(newest.prev, None);
        assert_eq!(newest.next.as_deref(), Some("html/2021-01-01-a.html"));

        let oldest = nav_links(&seq, 1);
        assert_eq!(oldest.prev.as_deref(), Some("../index.html"));
        assert_eq!(oldest.next.as_deref(), Some("../archive.html"));
    }

    #[test]
    fn test_archive_prev_mirrors_the_oldest_document() {
        let seq = five();
        let links = archive_nav(&seq);
        assert_eq!(links.prev.as_deref(), Some("html/2021-01-01-a.html"));
        assert_eq!(links.next, None);
    }

    #[test]
    fn test_archive_prev_is_index_for_a_single_document() {
        let seq = sequence(&["2021-01-01-a.md"]);
        let links = archive_nav(&seq);
        assert_eq!(links.prev.as_deref(), Some("index.html"));
        assert_eq!(links.next, None);
    }

    #[test]
    fn test_index_page_has_no_up_prefix() {
        assert_eq!(stylesheet_href(Location::Root), "css/styles.css");
        assert_eq!(
            source_href(Location::Root, "2021-01-01-a.md"),
            "md/2021-01-01-a.md"
        );
        assert_eq!(about_href(Location::Root), "about.html");
    }

    #[test]
    fn test_interior_pages_go_up_one_level() {
        assert_eq!(stylesheet_href(Location::Pages), "../css/styles.css");
        assert_eq!(index_href(Location::Pages), "../index.html");
        assert_eq!(
            source_href(Location::Pages, "2021-01-01-a.md"),
            "../md/2021-01-01-a.md"
        );
    }
}
