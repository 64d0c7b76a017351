pub mod allocate;
pub mod constants;
pub mod filter;
pub mod horizon;

pub use allocate::{DayMeals, allocate_day};
pub use constants::*;
pub use filter::eligible;
pub use horizon::allocate_plan;
