//! UI Components

pub mod connect_button;

pub use connect_button::ConnectButton;
