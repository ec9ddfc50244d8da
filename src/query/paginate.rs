use crate::models::{FilteredView, Page};

/// Cut a 1-indexed page out of a view.
///
/// `num_pages` is derived from the actual view length, never from a fixed
/// dataset size. An out-of-range page is not an error here: the slice
/// comes back empty alongside accurate `num_pages`/`total_records`, and
/// clamping the page selector is the caller's responsibility.
pub fn paginate<'a>(view: &FilteredView<'a>, page: usize, page_size: usize) -> Page<'a> {
    let total_records = view.len();
    let num_pages = if page_size == 0 {
        0
    } else {
        // Overflow-free ceiling division; page_size may be arbitrarily large
        total_records / page_size + usize::from(total_records % page_size != 0)
    };

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(total_records);

    let rows = if start < end {
        (start..end)
            .filter_map(|pos| view.label(pos).zip(view.get(pos)))
            .collect()
    } else {
        Vec::new()
    };

    Page {
        rows,
        page,
        num_pages,
        total_records,
    }
}
