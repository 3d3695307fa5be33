//! Hosted backend adapter

pub mod client;

pub use client::BackendClient;
