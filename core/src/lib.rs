//! Core logic for ChefAI: grocery detection from fridge photos, ingredient
//! ranking and recipe generation.
//!
//! The [`domain`] module holds the pure logic and the ports to external
//! collaborators, [`infrastructure`] the adapters behind those ports, and
//! [`application`] wires them into a ready-to-use service.

pub mod application;
pub mod domain;
pub mod infrastructure;
