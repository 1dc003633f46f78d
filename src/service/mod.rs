//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the services used by lannz-ai:
//! - LLM services (e.g., an OpenAI-compatible local inference server)
//! - The HTTP server callers talk to
//!
//! The LLM service defines both a generic trait and a concrete implementation,
//! allowing for extensibility and easy testing.

pub mod http;
pub mod llm;
