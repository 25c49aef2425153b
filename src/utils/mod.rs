//! Utility modules for the site descriptor.

pub mod date;
pub mod url;
