//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (secure randomness, base64url)
//! - Password hashing (Argon2id, constant-time verification)

pub mod crypto;
pub mod password;
