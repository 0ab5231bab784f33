pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod table;
pub mod utils;

pub use config::AppConfig;
pub use error::{ErrorKind, PricingError, Result};
pub use processors::{compute_landed_cost, LandedCostCalculator, QuoteRequest, Quoter};
pub use table::RateTable;
