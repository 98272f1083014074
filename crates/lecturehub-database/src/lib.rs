//! # lecturehub-database
//!
//! PostgreSQL connection management, migrations, concrete repositories,
//! and the two `EnrollmentStore` implementations (PostgreSQL and
//! in-memory).

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use memory::MemoryEnrollmentStore;
