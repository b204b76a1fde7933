//! Type-safe wrappers for depth chart data.

pub mod ids;
pub mod position;

pub use ids::PlayerNumber;
pub use position::Position;
