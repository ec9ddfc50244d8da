use serde::{Deserialize, Serialize};

use super::sales::SalesRecord;

/// The loaded sales dataset. Immutable after load; every query borrows it.
///
/// Records carry no key of their own: identity is the position in the
/// original file order, surfaced as the `Vente_N` row label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesDataset {
    records: Vec<SalesRecord>,
}

impl SalesDataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&SalesRecord> {
        self.records.get(index)
    }

    /// Row label for a zero-based record position (`Vente_1`..`Vente_N`).
    /// Derived from the actual position, never from a fixed dataset size.
    pub fn label(&self, index: usize) -> String {
        format!("Vente_{}", index + 1)
    }

    /// A view over the whole dataset, in source order.
    pub fn view(&self) -> FilteredView<'_> {
        FilteredView {
            dataset: self,
            indices: (0..self.records.len()).collect(),
        }
    }
}

/// An ordered subsequence of a [`SalesDataset`].
///
/// Holds the positions of the records that passed a filter, in ascending
/// source order, so row labels and pagination stay anchored to the
/// original file order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a SalesDataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// Indices must be in-bounds and strictly ascending.
    pub(crate) fn from_indices(dataset: &'a SalesDataset, indices: Vec<usize>) -> Self {
        Self { dataset, indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Record at a zero-based view position.
    pub fn get(&self, position: usize) -> Option<&'a SalesRecord> {
        self.indices.get(position).map(|&i| &self.dataset.records[i])
    }

    /// Original-order row label of the record at a view position.
    pub fn label(&self, position: usize) -> Option<String> {
        self.indices.get(position).map(|&i| self.dataset.label(i))
    }

    pub fn records(&self) -> impl Iterator<Item = &'a SalesRecord> + '_ {
        self.indices.iter().map(move |&i| &self.dataset.records[i])
    }

    /// (label, record) pairs in view order.
    pub fn labelled_records(&self) -> impl Iterator<Item = (String, &'a SalesRecord)> + '_ {
        self.indices
            .iter()
            .map(move |&i| (self.dataset.label(i), &self.dataset.records[i]))
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}
