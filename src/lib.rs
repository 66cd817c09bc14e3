//! Core library for the `review-loadtest` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, HTTP client profiles, the review-cycle workflow driven against the
//! target service, acceptable-status checking, metrics collection, and the
//! load scenarios that schedule cycles. The primary user-facing interface is
//! the `review-loadtest` command-line application.

pub mod checks;
pub mod cli;
pub mod config;
pub mod ids;
pub mod metrics;
pub mod scenarios;
pub mod service;
pub mod workflow;
