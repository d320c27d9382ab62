pub mod flow_canvas;
pub mod notification_bar;
pub mod status_bar;

pub use flow_canvas::FlowCanvas;
pub use notification_bar::NotificationBar;
pub use status_bar::StatusBar;
