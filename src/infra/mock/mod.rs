pub mod dataset;
pub mod repo;
