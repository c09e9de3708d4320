pub mod auth;
pub mod dashboard;
pub mod editor;
pub mod intake;
pub mod preview;
