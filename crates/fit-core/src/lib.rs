//! # fit-core
//!
//! Core types for Fitcheck.
//!
//! This crate provides the foundational types shared across all Fitcheck crates:
//! - Entity structs for the application snapshot (goals, actions, assessment scores, history)
//! - Closed enums for value dimensions, assessment domains, statuses and alert kinds
//! - Report types produced by `fit-engine`
//! - Snapshot validation errors

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
