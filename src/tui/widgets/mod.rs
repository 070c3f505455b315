pub mod header;
pub mod next_prayer;
pub mod prayers;
pub mod progress;
pub mod search;
pub mod statusbar;
pub mod toast;
