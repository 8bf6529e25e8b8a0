//! Application layer managing state and navigation.
//!
//! This module coordinates between the domain layer and presentation layer,
//! tracking which screen is shown and how screens hand pets to each other.

pub mod navigation;
pub mod state;

pub use navigation::{open_detail, Destination, Extras, Intent, PET_DETAILS};
pub use state::*;
