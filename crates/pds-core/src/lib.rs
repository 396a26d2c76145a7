pub mod config;
pub mod logging;

// Core classification modules.
pub mod classifier;
pub mod heuristics;
pub mod remote;
pub mod url_parts;
