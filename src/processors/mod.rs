pub mod calculator;
pub mod quote;

pub use calculator::{compute_landed_cost, CostBreakdown, LandedCostCalculator};
pub use quote::{render, render_error, QuoteRequest, Quoter};
