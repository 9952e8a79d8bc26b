//! # sk-core
//!
//! Core types and the log purge workflow for shopkeep.
//!
//! This crate provides everything that does not touch a concrete store:
//! - Entity structs for log records and log type terms
//! - The purge action and status enums
//! - Relative/absolute date expression normalization behind a [`dates::Clock`]
//! - Storage ports (`LogRepository`, `TermRepository`) implemented by `sk-db`
//! - The [`purge::LogPurge`] workflow and its reporting surface
//! - Error types shared by the workflow and its adapters
//! - The serializable report returned to the CLI

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ports;
pub mod purge;
pub mod responses;
