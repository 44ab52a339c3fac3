//! # Wiring Core - Port/Slot Availability for Central Controllers
//!
//! A central controller exposes a fixed number of input and output ports, and
//! each port carries a fixed number of sequence slots (keys). The admin
//! console wires devices to `(port, sequence)` pairs. This crate answers one
//! question for every pair: can it take a new assignment?
//!
//! ## Core Principle
//!
//! **Port identity is `order`, never list position**: the board descriptor
//! lists only ports that have assignments, in any order. Every computation
//! keys records by their `order` and covers every position up to the
//! declared limit.
//!
//! ## Data Flow
//!
//! ```text
//! BoardDescriptor ──▶ PortAvailabilityCalculator ──▶ Vec<PortAvailability>
//! (menu snapshot)        (once per Direction)          (picker input)
//!                                 ▲
//!                   HardwareProfile (sequence capacity)
//! ```

pub mod errors;
pub mod board;
pub mod profile;
pub mod availability;

pub use errors::WiringError;
pub use board::{BoardDescriptor, Direction, KeyAssignment, PortRecord, PortSet};
pub use profile::{HardwareProfile, SequenceCapacity, DEFAULT_SEQUENCE_CAPACITY};
pub use availability::{
    first_free_slot, AvailabilitySummary, BoardAvailability, PortAvailability,
    PortAvailabilityCalculator, SequenceSlotAvailability,
};

/// Crate version, reported by `wirectl --version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
