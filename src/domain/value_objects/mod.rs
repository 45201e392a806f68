//! Domain Value Objects - Immutable values that describe characteristics
//!
//! Value objects have no identity and are compared by their values.

pub mod apod_date;
pub mod view_adjustments;

pub use apod_date::{first_date, ApodDate, DATE_FORMAT};
pub use view_adjustments::{Adjustment, ViewAdjustments};
