//! Resilient client for the Met Museum's open access collection API.
//!
//! The crate is organized around the request pipeline: [`api`] wraps raw HTTP
//! with rate-limit tracking and retry, [`gallery`] turns object ID listings
//! into normalized artwork records in paced batches, and [`models`] defines
//! the record shapes. The [`cli`] module is the terminal front end.

pub mod api;
pub mod cli;
pub mod config;
pub mod gallery;
pub mod models;
