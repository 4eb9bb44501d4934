//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store access into use-case level APIs.
//! - Keep CLI/front-end layers decoupled from storage details.

pub mod quote_service;
pub mod transfer_service;
