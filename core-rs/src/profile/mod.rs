/**
 * profile module
 * Per-generation hardware configuration
 */

pub mod config;

pub use config::{
    HardwareProfile, ProfileMetadata, ProfileSpec, SequenceCapacity, DEFAULT_SEQUENCE_CAPACITY,
    MAX_SEQUENCE_CAPACITY, PROFILE_FILE_NAME,
};
