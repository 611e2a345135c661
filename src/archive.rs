//! Groups the ordered document sequence by its coarse year key and renders
//! the grouped listing as markdown. The sequence is globally sorted
//! descending, so keys arrive in non-increasing order and a single scan
//! with boundary detection is enough; no re-sorting happens here.

use crate::document::Document;
use crate::nav::{document_href, Location};

/// One archive group: a year key and the documents sharing it, in the same
/// descending order as the underlying sequence.
#[derive(Debug)]
pub struct ArchiveGroup<'a> {
    pub key: &'a str,
    pub entries: Vec<&'a Document>,
}

/// Walks the sequence in order, starting a new group whenever the year key
/// differs from the previous entry's key. Every document lands in exactly
/// one group.
pub fn group_documents(seq: &[Document]) -> Vec<ArchiveGroup<'_>> {
    let mut groups: Vec<ArchiveGroup> = Vec::new();
    for document in seq {
        match groups.last_mut() {
            Some(group) if group.key == document.year_key() => {
                group.entries.push(document);
            }
            _ => groups.push(ArchiveGroup {
                key: document.year_key(),
                entries: vec![document],
            }),
        }
    }
    groups
}

/// Renders the groups as a nested markdown listing: a top-level item per
/// year, a nested item per document linking its display title to the
/// rendered page. The archive page lives at the site root, so entry links
/// are root-relative.
pub fn archive_markdown(groups: &[ArchiveGroup]) -> String {
    use std::fmt::Write;

    let mut listing = String::new();
    for group in groups {
        let _ = writeln!(listing, "  * {}", group.key);
        for document in &group.entries {
            let _ = writeln!(
                listing,
                "    * [{}]({})",
                document.title(),
                document_href(Location::Root, document)
            );
        }
    }
    listing
}
