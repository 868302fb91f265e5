pub mod notification;
pub mod panel;
