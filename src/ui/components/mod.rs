pub mod controls;
pub mod detail_panel;
pub mod dropdown;
pub mod record_table;
pub mod styles;
pub mod summary_bar;
