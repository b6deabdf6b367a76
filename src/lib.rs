pub mod analyzers;
pub mod error;
pub mod generator;
pub mod lap_time;
pub mod output;
pub mod parser;
pub mod records;
pub mod validate;
