pub mod filter;
pub mod paginate;

pub use filter::SalesFilter;
pub use paginate::paginate;
