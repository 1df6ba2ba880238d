pub mod audits;
pub mod calibration;
pub mod documents;
pub mod equipment;
pub mod list_page;
pub mod users;
