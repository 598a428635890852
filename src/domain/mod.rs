//! Domain values exchanged with the roster backend and shown on the dashboard.

pub mod client;
pub mod gender;
pub mod selection;
pub mod sort;
pub mod types;
pub mod view_mode;
