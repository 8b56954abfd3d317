//! Single-domain output formatters.

mod human;
mod json;

pub use human::render_report;
pub use json::render_json;
