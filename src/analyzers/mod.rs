//! Descriptive aggregations over the filtered joined table.
//!
//! Each analyzer is a pure function of a slice of joined rows; it never
//! mutates its input and degrades to empty or NaN output on an empty slice.

pub mod correlation;
pub mod rfm;
pub mod types;
pub mod utility;
pub mod weather;
pub mod workingday;

#[cfg(test)]
pub(crate) mod test_rows;

pub use correlation::windspeed_count_correlation;
pub use rfm::summarize_rfm;
pub use weather::summarize_weather;
pub use workingday::summarize_working_day;
