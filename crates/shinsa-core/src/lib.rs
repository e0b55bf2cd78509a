//! # shinsa-core
//!
//! Core types, the review state machine, and error types for shinsa.
//!
//! This crate provides the foundational types shared across all shinsa crates:
//! - Entity structs for the domain objects (papers, reviews, comment presets)
//! - The per-(reviewer, paper) review state enum with its transition table
//! - Transient review-session state and the pure action-availability derivation
//! - Cross-cutting error types
//! - CLI response types

pub mod availability;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod session;
