//! Minimal financial ledger: accounts, and transactions booked against them under
//! an operation-type sign rule.
//!
//! - [`models`] and [`validation`] are pure and synchronous.
//! - [`storage`] is the persistence port with in-memory and Postgres adapters.
//! - [`engine`] runs the use cases; [`api`] exposes them over HTTP.

pub mod api;
pub mod config;
pub mod engine;
pub mod models;
pub mod storage;
pub mod types;
pub mod validation;
