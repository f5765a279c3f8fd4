//! Domain types for the postcode coverage engine.
//!
//! This module contains the core types that represent validated postcode
//! data. All types enforce their invariants at construction time, so code
//! that receives these types can trust their validity. Everything here is
//! pure: no I/O, no shared state.

mod area;
mod postcode;
mod sector;

pub use area::{AreaCode, AreaPrefix, InvalidAreaCode, InvalidAreaPrefix};
pub use postcode::{InvalidPostcode, Postcode, format_display, normalize};
pub use sector::{InvalidSector, Sector};
