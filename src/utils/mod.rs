//! Small JSON helpers shared by the endpoint methods.

pub mod merge;

pub use merge::merge_defaults;
