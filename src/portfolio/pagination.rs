// Page math for the project grid.

use serde::{Serialize, Serializer};

/// Most page buttons shown at once, excluding first/last and ellipses.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// One entry in the page control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(page) => serializer.serialize_u32(*page),
            PageItem::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Number of pages needed for `total_items`.
pub fn total_pages(total_items: usize, per_page: usize) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page) as u32
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// One-based inclusive range of items shown on `page`, e.g. "Showing 7-12 of 14".
///
/// `(0, 0)` when there are no items.
pub fn item_range(page: u32, per_page: usize, total_items: usize) -> (usize, usize) {
    if total_items == 0 || per_page == 0 {
        return (0, 0);
    }
    let page = page.max(1) as usize;
    let start = (page - 1) * per_page + 1;
    let end = (page * per_page).min(total_items);
    (start, end)
}

/// Page buttons around `current`, with first/last pages and ellipses.
///
/// Empty when there is at most one page.
pub fn page_window(current: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let current = clamp_page(current, total_pages);
    let mut start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);
    if end - start + 1 < MAX_VISIBLE_PAGES {
        start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }

    let mut items = Vec::new();
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    items.extend((start..=end).map(PageItem::Page));

    if end < total_pages {
        if end < total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total_pages));
    }

    items
}
