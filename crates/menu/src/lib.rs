//! Turns a yearly school-menu data file into the months and week cards that
//! should be shown on a given day.
//!
//! Everything here is pure: the caller passes "today" in, so the same
//! dataset and date always project to the same result.

mod category;
mod dataset;
mod error;
mod link;
mod month;
mod projection;
mod title;
mod week;

pub use category::*;
pub use dataset::*;
pub use error::*;
pub use link::*;
pub use month::*;
pub use projection::*;
pub use title::*;
pub use week::*;
