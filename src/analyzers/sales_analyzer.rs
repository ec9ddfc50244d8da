use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Channel, FilteredView, Product, Region};
use crate::utils::constants::COLUMNS;

/// Descriptive statistics for one product column.
///
/// Statistics are computed over the present values only; missing cells
/// reduce `count` but never poison the result. A column with no values
/// carries NaN throughout, and `std` needs at least two values (sample
/// standard deviation, N-1 denominator).
#[derive(Debug, Clone, Serialize)]
pub struct ColumnStats {
    pub product: Product,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Headline numbers for a filtered view, feeding the recommendations
/// block of the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct SalesOverview {
    pub total_records: usize,
    pub top_product: Option<Product>,
    pub top_region: Option<Region>,
    pub grand_total: f64,
}

impl SalesOverview {
    pub fn summary(&self) -> String {
        let product = self
            .top_product
            .map(|p| p.as_label().to_string())
            .unwrap_or_else(|| "none".to_string());
        let region = self
            .top_region
            .map(|r| r.as_label().to_string())
            .unwrap_or_else(|| "none".to_string());

        format!(
            "Records: {}\n\
            Grand total: {:.2}\n\
            Top product: {}\n\
            Top region: {}",
            self.total_records, self.grand_total, product, region
        )
    }
}

/// Ranking and descriptive-statistics queries over a filtered view.
///
/// Every method is a pure function of the view: no state, no I/O, and
/// total over empty views (None/NaN/empty outputs, never a panic).
pub struct SalesAnalyzer;

impl SalesAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Total sold per product, in the fixed column order.
    /// Missing cells contribute nothing to the sum.
    pub fn product_totals(&self, view: &FilteredView<'_>) -> Vec<(Product, f64)> {
        let mut totals: Vec<(Product, f64)> = Product::ALL.iter().map(|p| (*p, 0.0)).collect();
        for record in view.records() {
            for (slot, product) in Product::ALL.iter().enumerate() {
                if let Some(quantity) = record.quantity(*product) {
                    totals[slot].1 += quantity;
                }
            }
        }
        totals
    }

    /// Total sold per product for each sales channel, feeding the
    /// channel-comparison view of the presentation layer.
    ///
    /// Channels come out in `Channel::ALL` order and only when present
    /// in the view; records with a missing channel cell form no group,
    /// and missing quantity cells contribute nothing.
    pub fn channel_totals(&self, view: &FilteredView<'_>) -> Vec<(Channel, [f64; 6])> {
        let mut sums = [[0.0f64; 6]; Channel::ALL.len()];
        let mut seen = [false; Channel::ALL.len()];

        for record in view.records() {
            let Some(channel) = record.channel else {
                continue;
            };
            let slot = channel as usize;
            seen[slot] = true;
            for (i, product) in Product::ALL.iter().enumerate() {
                if let Some(quantity) = record.quantity(*product) {
                    sums[slot][i] += quantity;
                }
            }
        }

        Channel::ALL
            .iter()
            .enumerate()
            .filter(|(slot, _)| seen[*slot])
            .map(|(slot, channel)| (*channel, sums[slot]))
            .collect()
    }

    /// The best-selling product of the view, `None` for an empty view.
    ///
    /// Ties resolve to the product appearing first in the fixed column
    /// order (stable first-occurrence argmax).
    pub fn top_product(&self, view: &FilteredView<'_>) -> Option<Product> {
        if view.is_empty() {
            return None;
        }

        let totals = self.product_totals(view);
        let mut best = totals[0];
        for candidate in &totals[1..] {
            // Strict comparison keeps the earlier column on ties
            if candidate.1 > best.1 {
                best = *candidate;
            }
        }
        Some(best.0)
    }

    /// The region with the highest combined sales across all products,
    /// `None` when the view is empty or no record carries a region.
    ///
    /// Groups form in alphabetical region order; ties resolve to the
    /// alphabetically first region among those present in the view.
    pub fn top_region(&self, view: &FilteredView<'_>) -> Option<Region> {
        let mut totals: BTreeMap<Region, f64> = BTreeMap::new();
        for record in view.records() {
            let Some(region) = record.region else {
                continue;
            };
            *totals.entry(region).or_insert(0.0) += record.total();
        }

        let mut best: Option<(Region, f64)> = None;
        for (region, total) in totals {
            // Map iterates alphabetically; strict comparison keeps the
            // first region on ties
            let replace = match best {
                Some((_, best_total)) => total > best_total,
                None => true,
            };
            if replace {
                best = Some((region, total));
            }
        }
        best.map(|(region, _)| region)
    }

    /// Per-product descriptive statistics, in the fixed column order.
    pub fn describe(&self, view: &FilteredView<'_>) -> Vec<ColumnStats> {
        Product::ALL
            .iter()
            .map(|product| {
                let mut values: Vec<f64> = view
                    .records()
                    .filter_map(|r| r.quantity(*product))
                    .collect();
                values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
                column_stats(*product, &values)
            })
            .collect()
    }

    /// Missing cells per column, in schema order, non-zero counts only.
    pub fn missing_value_report(&self, view: &FilteredView<'_>) -> Vec<(&'static str, usize)> {
        let mut counts = [0usize; COLUMNS.len()];
        for record in view.records() {
            if record.channel.is_none() {
                counts[0] += 1;
            }
            if record.region.is_none() {
                counts[1] += 1;
            }
            for (slot, product) in Product::ALL.iter().enumerate() {
                if record.quantity(*product).is_none() {
                    counts[slot + 2] += 1;
                }
            }
        }

        COLUMNS
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(column, count)| (*column, count))
            .collect()
    }

    /// Headline overview used by the presentation layer.
    pub fn overview(&self, view: &FilteredView<'_>) -> SalesOverview {
        let grand_total = view.records().map(|r| r.total()).sum();
        SalesOverview {
            total_records: view.len(),
            top_product: self.top_product(view),
            top_region: self.top_region(view),
            grand_total,
        }
    }
}

impl Default for SalesAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn column_stats(product: Product, sorted: &[f64]) -> ColumnStats {
    let count = sorted.len();
    if count == 0 {
        return ColumnStats {
            product,
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std = if count > 1 {
        let sum_sq: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (count - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    ColumnStats {
        product,
        count,
        mean,
        std,
        min: sorted[0],
        q25: quantile(sorted, 0.25),
        median: quantile(sorted, 0.5),
        q75: quantile(sorted, 0.75),
        max: sorted[count - 1],
    }
}

/// Quantile by linear interpolation between closest ranks, over an
/// already sorted non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
