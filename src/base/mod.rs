//! Core components, types, and utilities for lannz-ai.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - The facts document and the system prompt built around it.
//! - Common types and result handling.

pub mod config;
pub mod facts;
pub mod prompts;
pub mod types;
