pub mod results;
pub mod scoring;
