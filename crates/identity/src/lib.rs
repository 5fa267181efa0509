//! `palisade-identity` — the principal abstraction consumed by the rule engine.
//!
//! This crate is intentionally decoupled from any role store, session layer,
//! or transport: it defines *what the engine may ask about a principal* and a
//! plain value type answering those questions.

pub mod identity;
pub mod user;

pub use identity::Identity;
pub use user::User;
