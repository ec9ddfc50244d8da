pub mod sales_analyzer;

pub use sales_analyzer::{ColumnStats, SalesAnalyzer, SalesOverview};
