/**
 * config.rs
 * Parser for hardware profile files (YAML format)
 *
 * Format:
 * ```yaml
 * apiVersion: wiring/v1
 * kind: HardwareProfile
 * metadata:
 *   name: gen2-central
 * spec:
 *   sequenceCapacity: 4
 * ```
 *
 * The sequence capacity is a property of the board generation, so it lives
 * here rather than in the calculator.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::errors::{Result, WiringError};

pub const API_VERSION: &str = "wiring/v1";
pub const KIND: &str = "HardwareProfile";

/// File name looked up by `HardwareProfile::load_from_dir`
pub const PROFILE_FILE_NAME: &str = ".wiringprofile";

/// Sequence slots per port on the current hardware generation
pub const DEFAULT_SEQUENCE_CAPACITY: u32 = 4;

/// Largest capacity accepted from a profile or the command line
pub const MAX_SEQUENCE_CAPACITY: u32 = 256;

/// Number of sequence slots each port exposes, in `1..=MAX_SEQUENCE_CAPACITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SequenceCapacity(u32);

impl SequenceCapacity {
    pub fn new(slots: u32) -> Result<Self> {
        if slots == 0 {
            return Err(WiringError::ValidationError(
                "sequence capacity must be at least 1".to_string(),
            ));
        }
        if slots > MAX_SEQUENCE_CAPACITY {
            return Err(WiringError::ValidationError(format!(
                "sequence capacity {} exceeds the maximum of {}",
                slots, MAX_SEQUENCE_CAPACITY
            )));
        }
        Ok(SequenceCapacity(slots))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for SequenceCapacity {
    fn default() -> Self {
        SequenceCapacity(DEFAULT_SEQUENCE_CAPACITY)
    }
}

impl fmt::Display for SequenceCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hardware profile document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HardwareProfile {
    pub api_version: String,
    pub kind: String,
    pub metadata: ProfileMetadata,
    pub spec: ProfileSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileMetadata {
    pub name: String,
    /// Free-form note shown by `wirectl profile`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSpec {
    pub sequence_capacity: u32,
}

impl HardwareProfile {
    /// Create a profile for a named board generation
    pub fn new(name: String, sequence_capacity: u32) -> Self {
        HardwareProfile {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata: ProfileMetadata {
                name,
                description: None,
            },
            spec: ProfileSpec { sequence_capacity },
        }
    }

    /// Load a profile from the specified path
    ///
    /// # Example
    /// ```no_run
    /// use wiring_core::HardwareProfile;
    ///
    /// let profile = HardwareProfile::load("gen2.yaml").unwrap();
    /// assert_eq!(profile.metadata.name, "gen2-central");
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(WiringError::FileNotFound(
                path.to_string_lossy().to_string(),
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            WiringError::IoError(format!("Failed to read hardware profile: {}", e))
        })?;

        let profile: HardwareProfile = serde_yaml::from_str(&content).map_err(|e| {
            WiringError::ParseError(format!("Invalid hardware profile YAML: {}", e))
        })?;

        profile.validate()?;

        Ok(profile)
    }

    /// Load `.wiringprofile` from a directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::load(dir.as_ref().join(PROFILE_FILE_NAME))
    }

    /// Validate profile structure
    ///
    /// Ensures:
    /// - apiVersion is "wiring/v1"
    /// - kind is "HardwareProfile"
    /// - metadata.name is non-empty
    /// - spec.sequenceCapacity is in 1..=256
    pub fn validate(&self) -> Result<()> {
        if self.api_version != API_VERSION {
            return Err(WiringError::ValidationError(format!(
                "Invalid apiVersion: expected '{}', got '{}'",
                API_VERSION, self.api_version
            )));
        }

        if self.kind != KIND {
            return Err(WiringError::ValidationError(format!(
                "Invalid kind: expected '{}', got '{}'",
                KIND, self.kind
            )));
        }

        if self.metadata.name.is_empty() {
            return Err(WiringError::ValidationError(
                "metadata.name cannot be empty".to_string(),
            ));
        }

        SequenceCapacity::new(self.spec.sequence_capacity)?;

        Ok(())
    }

    /// Capacity declared by this profile
    pub fn sequence_capacity(&self) -> Result<SequenceCapacity> {
        SequenceCapacity::new(self.spec.sequence_capacity)
    }

    /// Save profile to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| {
            WiringError::SerializationError(format!("Failed to serialize hardware profile: {}", e))
        })?;

        fs::write(path.as_ref(), yaml).map_err(|e| {
            WiringError::IoError(format!("Failed to write hardware profile: {}", e))
        })?;

        Ok(())
    }
}

impl Default for HardwareProfile {
    fn default() -> Self {
        HardwareProfile::new("default".to_string(), DEFAULT_SEQUENCE_CAPACITY)
    }
}
