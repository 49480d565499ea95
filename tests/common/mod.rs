//! Consolidated test utilities for promptline
//!
//! This module provides unified testing utilities for integration tests,
//! focused on real git repository scenarios for reliable testing.

pub mod fixtures;
pub mod repository;
