//! aerometa - index and alias abstractions over AeroDB cluster metadata

pub mod cli;
pub mod metadata;
pub mod observability;
