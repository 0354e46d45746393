//! The solving engine and its supporting machinery.

pub mod domain;
pub mod engine;
pub mod outcome;
pub mod stats;
pub mod work_list;
