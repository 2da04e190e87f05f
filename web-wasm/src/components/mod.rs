pub mod database_panel;
pub mod extraction_panel;
pub mod header;
pub mod mode_tabs;
