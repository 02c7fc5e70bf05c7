pub mod data;
pub mod line_editor;
pub mod list_state;
pub mod state;
