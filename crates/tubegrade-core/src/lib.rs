//! tubegrade-core - Core library for tubegrade
//!
//! This crate provides the business logic for the tubegrade tool: the
//! catalog of users, videos and comments, the comment quality scorer,
//! and report rendering for analysis results.

pub mod error;
pub mod types;
pub mod config;
pub mod catalog;
pub mod scoring;
pub mod report;

pub use error::{Result, TubegradeError};
pub use types::*;
