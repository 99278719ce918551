//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the crate (kernel-facing).
//! - `adapters`: OS specific implementations (filesystem IO).

pub mod adapters;
pub mod ports;
