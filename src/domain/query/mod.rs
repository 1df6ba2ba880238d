pub mod engine;
pub mod result;
pub mod spec;

pub use engine::query;
pub use result::QueryResult;
pub use spec::{QuerySpec, RangeBound, RangeFilter, SortDirection, SortSpec};
