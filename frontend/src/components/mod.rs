pub mod field_control;
pub mod layout;
pub mod top_sheet;
pub mod widgets;
