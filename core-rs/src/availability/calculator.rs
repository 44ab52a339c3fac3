/**
 * calculator.rs
 * Port/slot availability for one direction of a central controller
 *
 * For every port position in [0, limit) and every sequence position in
 * [0, capacity), decide whether it can receive a new assignment.
 *
 * Rules:
 * - Records are keyed by `order`; their index in the list carries no meaning
 * - A position without a record is fully free
 * - A slot is taken iff some assignment on that port uses its sequence order
 * - A port is available while it has fewer assignments than the capacity
 *
 * The whole descriptor is validated before any output is built, so a call
 * either returns every position or fails.
 */

use std::collections::HashMap;

use crate::availability::report::{
    BoardAvailability, PortAvailability, SequenceSlotAvailability,
};
use crate::board::{BoardDescriptor, Direction, PortRecord, PortSet};
use crate::errors::{Result, WiringError};
use crate::profile::{HardwareProfile, SequenceCapacity};

/// Pure availability calculator parameterized by the board generation's
/// sequence capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortAvailabilityCalculator {
    capacity: SequenceCapacity,
}

impl PortAvailabilityCalculator {
    pub fn new(capacity: SequenceCapacity) -> Self {
        PortAvailabilityCalculator { capacity }
    }

    /// Build a calculator from a hardware profile
    pub fn from_profile(profile: &HardwareProfile) -> Result<Self> {
        Ok(Self::new(profile.sequence_capacity()?))
    }

    pub fn sequence_capacity(&self) -> SequenceCapacity {
        self.capacity
    }

    /// Compute availability for every position of one port set
    ///
    /// # Returns
    /// Exactly `set.limit` entries ordered by ascending `port_position`
    ///
    /// # Errors
    /// Returns a data-integrity error if:
    /// - Two records share an order
    /// - A record's order is not below the limit
    /// - An assignment's sequence order is not below the capacity
    /// - An assignment's sequence order repeats within one record
    pub fn compute(&self, set: PortSet<'_>) -> Result<Vec<PortAvailability>> {
        let capacity = self.capacity.get();

        tracing::debug!(
            direction = %set.direction,
            limit = set.limit,
            records = set.ports.len(),
            capacity,
            "computing port availability"
        );

        let occupancy = self.index_records(set)?;

        let availability = (0..set.limit)
            .map(|position| match occupancy.get(&position) {
                None => PortAvailability::unconfigured(position, capacity),
                Some(taken) => {
                    let sequence_slots: Vec<SequenceSlotAvailability> = taken
                        .iter()
                        .zip(0..capacity)
                        .map(|(&is_taken, sequence_position)| SequenceSlotAvailability {
                            sequence_position,
                            is_available: !is_taken,
                        })
                        .collect();
                    let occupied = taken.iter().filter(|&&is_taken| is_taken).count();

                    PortAvailability {
                        port_position: position,
                        is_available: occupied < capacity as usize,
                        sequence_slots,
                    }
                }
            })
            .collect();

        Ok(availability)
    }

    /// Compute availability for one direction of a board
    pub fn compute_direction(
        &self,
        board: &BoardDescriptor,
        direction: Direction,
    ) -> Result<Vec<PortAvailability>> {
        self.compute(board.ports(direction))
    }

    /// Compute both directions of a board view. Fails if either side fails.
    pub fn compute_board(&self, board: &BoardDescriptor) -> Result<BoardAvailability> {
        Ok(BoardAvailability {
            inputs: self.compute_direction(board, Direction::Input)?,
            outputs: self.compute_direction(board, Direction::Output)?,
        })
    }

    /// Validate every record and map each port order to its taken slots
    fn index_records(&self, set: PortSet<'_>) -> Result<HashMap<u32, Vec<bool>>> {
        let mut occupancy = HashMap::with_capacity(set.ports.len());

        for record in set.ports {
            if record.order >= set.limit {
                return Err(integrity_violation(WiringError::PortOrderOutOfRange {
                    direction: set.direction,
                    order: record.order,
                    limit: set.limit,
                }));
            }

            if occupancy.contains_key(&record.order) {
                return Err(integrity_violation(WiringError::DuplicatePortOrder {
                    direction: set.direction,
                    order: record.order,
                }));
            }

            let taken = self.taken_slots(set.direction, record)?;
            occupancy.insert(record.order, taken);
        }

        Ok(occupancy)
    }

    fn taken_slots(&self, direction: Direction, record: &PortRecord) -> Result<Vec<bool>> {
        let capacity = self.capacity.get();
        let mut taken = vec![false; capacity as usize];

        for assignment in &record.assignments {
            let sequence = assignment.sequence_order;

            if sequence >= capacity {
                return Err(integrity_violation(WiringError::SequenceOrderOutOfRange {
                    direction,
                    order: record.order,
                    sequence,
                    capacity,
                }));
            }

            let slot = &mut taken[sequence as usize];
            if *slot {
                return Err(integrity_violation(WiringError::DuplicateSequenceOrder {
                    direction,
                    order: record.order,
                    sequence,
                }));
            }
            *slot = true;
        }

        Ok(taken)
    }
}

fn integrity_violation(err: WiringError) -> WiringError {
    tracing::warn!(error = %err, "board descriptor failed integrity check");
    err
}
