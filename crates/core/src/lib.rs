//! Core domain and storage contracts for the goaltrack project.
//!
//! This crate is transport-agnostic. It defines the single-table storage
//! abstraction and key encoding scheme, and the user domain logic layered on
//! top of them. Concrete storage backends live in the `goaltrack` service
//! crate and are selected there at compile time.

pub mod storage;
pub mod user;
