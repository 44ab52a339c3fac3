/**
 * board module
 * Board descriptors supplied by the menu/project fetch
 */

pub mod descriptor;

pub use descriptor::{BoardDescriptor, Direction, KeyAssignment, PortRecord, PortSet};
