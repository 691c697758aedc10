//! Core library components.
//!
//! Everything needed to reconcile a desired set of variables against a
//! CircleCI project, independent of the terminal.

pub mod config;
pub mod constants;
pub mod domain;
pub mod manager;
pub mod parse;
pub mod prompt;
pub mod reconcile;
pub mod remote;
pub mod types;
pub mod validation;
