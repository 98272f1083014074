//! # lecturehub-auth
//!
//! Authentication building blocks: JWT encoding/decoding and Argon2id
//! password hashing with the platform's password policy.

pub mod jwt;
pub mod password;
