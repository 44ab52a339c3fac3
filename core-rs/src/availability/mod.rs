/**
 * availability module
 * Port/slot availability for central controller wiring
 */

pub mod calculator;
pub mod report;

pub use calculator::PortAvailabilityCalculator;
pub use report::{
    first_free_slot, AvailabilitySummary, BoardAvailability, PortAvailability,
    SequenceSlotAvailability,
};
