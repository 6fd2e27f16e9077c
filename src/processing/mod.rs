//! Network calculations.
//!
//! - [`calculator`] - network/broadcast addresses, host counts and
//!   classful classification

mod calculator;

// Re-export public functions
pub use calculator::{
    broadcast_address, calculate, classify_address, default_prefix_length, is_classful,
    network_address, prefix_length, usable_hosts,
};
