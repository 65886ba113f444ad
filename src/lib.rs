//! Shift Pay Engine
//!
//! This crate computes pay for hourly shifts under a differential wage-rate
//! policy (an early-morning premium on non-Saturdays, a flat Saturday rate and
//! a standard rate otherwise) and summarises a reporting period's shifts into
//! per-bucket hour subtotals.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
