pub mod listing;
pub mod report;
pub mod summary;
pub mod widgets;

pub use listing::SalesListing;
pub use report::SalesReport;
pub use summary::SalesSummary;
