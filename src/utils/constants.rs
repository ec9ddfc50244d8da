/// Column headers in the fixed schema order of the dataset file.
pub const COLUMNS: [&str; 8] = [
    "Channel",
    "Region",
    "Robusta",
    "Arabica",
    "Espresso",
    "Lungo",
    "Latte",
    "Cappuccino",
];

/// Expected field count per data row.
pub const COLUMN_COUNT: usize = 8;

/// Number of product columns.
pub const PRODUCT_COUNT: usize = 6;

/// Default rows per page in paginated views.
pub const DEFAULT_PAGE_SIZE: usize = 10;
