pub mod header;
pub mod upload_area;
pub mod detect_button;
pub mod result_popup;
