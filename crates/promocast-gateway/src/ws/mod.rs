pub mod broadcast;
pub mod connection;
pub mod message;
