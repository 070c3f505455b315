pub mod app;
pub mod events;
pub mod notify;
pub mod theme;
pub mod widgets;
pub mod worker;
