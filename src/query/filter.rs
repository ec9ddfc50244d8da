use std::collections::BTreeSet;

use crate::error::{AnalyticsError, Result};
use crate::models::{Channel, FilteredView, Region, SalesDataset};
use tracing::debug;

/// Categorical selection over the two filterable dimensions.
///
/// Mirrors the multiselect semantics of the dashboard it backs: an empty
/// selection set means *nothing* passes, not "no restriction". Records
/// with a missing channel or region cell never match any selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesFilter {
    channels: BTreeSet<Channel>,
    regions: BTreeSet<Region>,
}

impl SalesFilter {
    pub fn new(
        channels: impl IntoIterator<Item = Channel>,
        regions: impl IntoIterator<Item = Region>,
    ) -> Self {
        Self {
            channels: channels.into_iter().collect(),
            regions: regions.into_iter().collect(),
        }
    }

    /// Filter that selects every channel and region (identity filter).
    pub fn all() -> Self {
        Self::new(Channel::ALL, Region::ALL)
    }

    /// Build a filter from raw label strings, e.g. CLI arguments.
    ///
    /// Unknown labels are rejected rather than silently matching nothing,
    /// so upstream data-entry mistakes surface immediately.
    pub fn from_labels<C, R>(channels: C, regions: R) -> Result<Self>
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let mut channel_set = BTreeSet::new();
        for label in channels {
            let label = label.as_ref();
            let channel = Channel::from_label(label)
                .ok_or_else(|| AnalyticsError::InvalidFilter(format!("channel '{label}'")))?;
            channel_set.insert(channel);
        }

        let mut region_set = BTreeSet::new();
        for label in regions {
            let label = label.as_ref();
            let region = Region::from_label(label)
                .ok_or_else(|| AnalyticsError::InvalidFilter(format!("region '{label}'")))?;
            region_set.insert(region);
        }

        Ok(Self {
            channels: channel_set,
            regions: region_set,
        })
    }

    pub fn channels(&self) -> &BTreeSet<Channel> {
        &self.channels
    }

    pub fn regions(&self) -> &BTreeSet<Region> {
        &self.regions
    }

    /// Select the matching subsequence of the dataset, in source order.
    ///
    /// Pure and deterministic: the same filter over the same dataset
    /// always yields the same view.
    pub fn apply<'a>(&self, dataset: &'a SalesDataset) -> FilteredView<'a> {
        let indices: Vec<usize> = dataset
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                let channel_ok = record
                    .channel
                    .is_some_and(|c| self.channels.contains(&c));
                let region_ok = record.region.is_some_and(|r| self.regions.contains(&r));
                channel_ok && region_ok
            })
            .map(|(i, _)| i)
            .collect();

        debug!(
            channels = self.channels.len(),
            regions = self.regions.len(),
            matched = indices.len(),
            total = dataset.len(),
            "filter applied"
        );

        FilteredView::from_indices(dataset, indices)
    }
}

impl Default for SalesFilter {
    fn default() -> Self {
        Self::all()
    }
}
