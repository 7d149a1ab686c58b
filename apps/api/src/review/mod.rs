//! Entry-level suggestion review — assembles per-field annotations for a
//! whole experience/project entry (description bullets + technology tags).

pub mod entry;
pub mod handlers;
