//! Entity structs for the catalog domain.
//!
//! These are the normalized shapes every backend flavor maps into. All structs
//! derive `Serialize` and `Deserialize` for JSON roundtrip; missing wire data
//! is always defaulted by the adapter before it reaches these types, so none
//! of the string fields here are `Option` unless absence is meaningful to the
//! caller.

mod attraction;
mod category;
mod review;

pub use attraction::Attraction;
pub use category::Category;
pub use review::{NewReview, Review};
