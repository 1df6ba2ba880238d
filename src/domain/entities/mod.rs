pub mod audit;
pub mod document;
pub mod equipment;
pub mod record;
pub mod user;
