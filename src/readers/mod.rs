pub mod sales_reader;

pub use sales_reader::SalesReader;
