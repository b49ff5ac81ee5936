//! Core decision logic for herald: brief validation, prompt construction,
//! plan parsing and recovery, fallback synthesis, and orchestration.
//!
//! This crate contains no transport. The HTTP surface lives in `herald-cli`;
//! everything here is callable from tests without a network or a server.

pub mod brief;
pub mod generator;
pub mod model;
pub mod plan;
