pub mod bulk_service;
pub mod query_service;
