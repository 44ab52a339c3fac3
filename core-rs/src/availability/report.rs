//! Availability projections handed to the presentation layer.
//!
//! These values are produced fresh by every computation and are never written
//! back into a `BoardDescriptor`.

use serde::{Deserialize, Serialize};

use crate::board::Direction;

/// Free/taken state of one sequence slot within a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceSlotAvailability {
    pub sequence_position: u32,
    pub is_available: bool,
}

/// Availability of one physical port position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortAvailability {
    pub port_position: u32,
    /// True while the port can take at least one more assignment
    pub is_available: bool,
    pub sequence_slots: Vec<SequenceSlotAvailability>,
}

impl PortAvailability {
    /// A port nobody has wired yet
    pub(crate) fn unconfigured(port_position: u32, capacity: u32) -> Self {
        PortAvailability {
            port_position,
            is_available: true,
            sequence_slots: (0..capacity)
                .map(|sequence_position| SequenceSlotAvailability {
                    sequence_position,
                    is_available: true,
                })
                .collect(),
        }
    }

    /// Sequence positions still free on this port, ascending
    pub fn free_sequences(&self) -> impl Iterator<Item = u32> + '_ {
        self.sequence_slots
            .iter()
            .filter(|slot| slot.is_available)
            .map(|slot| slot.sequence_position)
    }

    pub fn occupied_count(&self) -> usize {
        self.sequence_slots
            .iter()
            .filter(|slot| !slot.is_available)
            .count()
    }
}

/// Lowest free `(port_position, sequence_position)`, used as the default
/// selection of a port/sequence picker.
pub fn first_free_slot(ports: &[PortAvailability]) -> Option<(u32, u32)> {
    ports
        .iter()
        .filter(|port| port.is_available)
        .find_map(|port| {
            port.free_sequences()
                .next()
                .map(|sequence| (port.port_position, sequence))
        })
}

/// Counts over one direction of a board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySummary {
    pub ports_total: usize,
    pub ports_available: usize,
    pub slots_total: usize,
    pub slots_free: usize,
}

impl AvailabilitySummary {
    pub fn from_ports(ports: &[PortAvailability]) -> Self {
        ports.iter().fold(Self::default(), |mut acc, port| {
            acc.ports_total += 1;
            if port.is_available {
                acc.ports_available += 1;
            }
            acc.slots_total += port.sequence_slots.len();
            acc.slots_free += port.sequence_slots.len() - port.occupied_count();
            acc
        })
    }
}

/// Both directions of one board view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardAvailability {
    pub inputs: Vec<PortAvailability>,
    pub outputs: Vec<PortAvailability>,
}

impl BoardAvailability {
    pub fn direction(&self, direction: Direction) -> &[PortAvailability] {
        match direction {
            Direction::Input => &self.inputs,
            Direction::Output => &self.outputs,
        }
    }

    pub fn summary(&self, direction: Direction) -> AvailabilitySummary {
        AvailabilitySummary::from_ports(self.direction(direction))
    }
}
