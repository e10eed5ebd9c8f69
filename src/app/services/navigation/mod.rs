//! Navigation geometry for waypoint sequences
//!
//! - [`bearing`] - Initial compass bearing between two points
//! - [`headings`] - Heading post-pass over a parsed mission

pub mod bearing;
pub mod headings;

pub use bearing::bearing;
pub use headings::resolve_headings;
