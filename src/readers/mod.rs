pub mod rate_reader;

pub use rate_reader::RateTableReader;
