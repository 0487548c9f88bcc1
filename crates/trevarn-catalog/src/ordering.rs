//! Canonical display order.

use crate::scanner::PageEntry;

/// Sort pages by their position in `order`.
///
/// Pages missing from `order` go last. The sort is stable, so they keep the
/// order they arrived in; the scanner hands them over sorted by filename.
pub fn order_pages(pages: &mut [PageEntry], order: &[String]) {
    pages.sort_by_key(|page| position(order, &page.filename));
}

fn position(order: &[String], filename: &str) -> usize {
    order
        .iter()
        .position(|name| name == filename)
        .unwrap_or(order.len())
}
