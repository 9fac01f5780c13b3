//! Utility function module

pub mod name;
pub mod quantity;

pub use name::{validate_namespace_name, validate_path_segment_name, validate_resource_name};
pub use quantity::{parse_cpu_millis, parse_memory_bytes};
