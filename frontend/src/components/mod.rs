pub mod dialogs;
pub mod expenses;
pub mod forms;
pub mod header;
pub mod summary_chart;
pub mod summary_panel;
