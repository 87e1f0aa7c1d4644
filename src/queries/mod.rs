//! Query modules for the collection backend.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes methods returning
//! `Result<T>` with typed model payloads.

pub mod items;

pub use items::ItemsClient;
