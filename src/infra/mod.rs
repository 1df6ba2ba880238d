pub mod export;
pub mod mock;
pub mod sqlite;
