/**
 * descriptor.rs
 * Board descriptor: one central controller's declared port limits and the
 * wiring currently assigned to it.
 *
 * Menu payload (JSON, camelCase):
 * ```json
 * {
 *   "boardInputLimit": 8,
 *   "boardOutputLimit": 6,
 *   "inputPorts": [
 *     { "order": 2, "keys": [{ "sequenceOrder": 0 }, { "sequenceOrder": 3 }] }
 *   ],
 *   "outputPorts": []
 * }
 * ```
 *
 * Port lists are sparse: only ports with at least one assignment appear, in
 * any order. A port is identified by `order`, never by its index in the list.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::errors::{Result, WiringError};

/// Which side of the board a computation concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Input,
    Output,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Input, Direction::Output];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Input => "input",
            Direction::Output => "output",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One occupied sequence slot on a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyAssignment {
    pub sequence_order: u32,
}

/// A physical port touched by at least one assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRecord {
    pub order: u32,
    #[serde(alias = "keys", default)]
    pub assignments: Vec<KeyAssignment>,
}

impl PortRecord {
    /// Create a record at `order` occupying the given sequence positions
    pub fn new<I>(order: u32, sequences: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        PortRecord {
            order,
            assignments: sequences
                .into_iter()
                .map(|sequence_order| KeyAssignment { sequence_order })
                .collect(),
        }
    }
}

/// Board descriptor as supplied by the menu/project fetch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDescriptor {
    #[serde(alias = "inputPortsTotal", default)]
    pub board_input_limit: u32,
    #[serde(alias = "outputPortsTotal", default)]
    pub board_output_limit: u32,
    #[serde(default)]
    pub input_ports: Vec<PortRecord>,
    #[serde(default)]
    pub output_ports: Vec<PortRecord>,
}

/// Borrowed view of one direction of a board: its limit and its sparse records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSet<'a> {
    pub direction: Direction,
    pub limit: u32,
    pub ports: &'a [PortRecord],
}

impl<'a> PortSet<'a> {
    pub fn new(direction: Direction, limit: u32, ports: &'a [PortRecord]) -> Self {
        PortSet {
            direction,
            limit,
            ports,
        }
    }
}

impl BoardDescriptor {
    /// Create an unwired board with the given limits
    pub fn new(board_input_limit: u32, board_output_limit: u32) -> Self {
        BoardDescriptor {
            board_input_limit,
            board_output_limit,
            input_ports: Vec::new(),
            output_ports: Vec::new(),
        }
    }

    pub fn with_input_port(mut self, record: PortRecord) -> Self {
        self.input_ports.push(record);
        self
    }

    pub fn with_output_port(mut self, record: PortRecord) -> Self {
        self.output_ports.push(record);
        self
    }

    /// Declared capacity for a direction
    pub fn limit(&self, direction: Direction) -> u32 {
        match direction {
            Direction::Input => self.board_input_limit,
            Direction::Output => self.board_output_limit,
        }
    }

    /// Select the limit and records a direction reads
    pub fn ports(&self, direction: Direction) -> PortSet<'_> {
        let records = match direction {
            Direction::Input => &self.input_ports,
            Direction::Output => &self.output_ports,
        };
        PortSet::new(direction, self.limit(direction), records)
    }

    /// Parse a descriptor from a menu JSON payload
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| WiringError::ParseError(format!("Invalid board descriptor JSON: {}", e)))
    }

    /// Load a descriptor snapshot from a JSON file
    ///
    /// # Example
    /// ```no_run
    /// use wiring_core::BoardDescriptor;
    ///
    /// let board = BoardDescriptor::load("board.json").unwrap();
    /// println!("{} inputs", board.board_input_limit);
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(WiringError::FileNotFound(
                path.to_string_lossy().to_string(),
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            WiringError::IoError(format!("Failed to read board descriptor: {}", e))
        })?;

        Self::from_json_str(&content)
    }

    /// Save the descriptor as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            WiringError::SerializationError(format!("Failed to serialize board descriptor: {}", e))
        })?;

        fs::write(path.as_ref(), json).map_err(|e| {
            WiringError::IoError(format!("Failed to write board descriptor: {}", e))
        })?;

        Ok(())
    }
}
