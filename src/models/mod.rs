pub mod dataset;
pub mod page;
pub mod sales;

pub use dataset::{FilteredView, SalesDataset};
pub use page::Page;
pub use sales::{Channel, Product, Region, SalesRecord};
