//! Support chat: one transcript across a support bot and a live-agent desk.
//!
//! This crate merges a support bot conversation with the live-agent
//! conversation it was handed off to, producing a single ordered transcript
//! for the support interaction the user is in.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`chat`]: Combined chat state, transition rule and service

pub mod chat;
