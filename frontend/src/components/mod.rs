pub mod empty_state;
pub mod error;
pub mod icon_button;
pub mod layout;
pub mod loader;
pub mod not_found;
