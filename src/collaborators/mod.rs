//! Narrow interfaces to the two external collaborators this engine is
//! wired against but does not implement: an AES block engine and an SSL
//! session cache. Neither belongs to the curve arithmetic itself; they
//! exist here only so the rest of the engine has something concrete to
//! call through.

pub mod aes;
pub mod session_cache;
