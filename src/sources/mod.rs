pub mod bayut;
pub mod traits;
pub mod types;

pub use bayut::BayutClient;
pub use traits::ListingSource;
