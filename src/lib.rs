pub mod analyzers;
pub mod charts;
pub mod dataset;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod server;
