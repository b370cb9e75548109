//! Utility functions for presenting registry organizations.
//!
//! - [`org_name`] - Website extraction and display-name disambiguation

pub mod org_name;
