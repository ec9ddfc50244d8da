use super::sales::SalesRecord;

/// One page of a filtered view: the visible rows plus the pagination
/// metadata the presentation layer needs to clamp its page selector.
#[derive(Debug)]
pub struct Page<'a> {
    /// (row label, record) pairs in view order; may be empty for an
    /// out-of-range page.
    pub rows: Vec<(String, &'a SalesRecord)>,
    /// The 1-indexed page number that was requested.
    pub page: usize,
    /// Total pages at the requested page size; 0 for an empty view.
    pub num_pages: usize,
    /// Record count of the underlying view, not of this page.
    pub total_records: usize,
}

impl<'a> Page<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
