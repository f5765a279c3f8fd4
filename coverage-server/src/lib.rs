//! Driving school booking server.
//!
//! A web application that answers: "do you teach in my postcode?"
//! and takes the booking from there.

pub mod catalogue;
pub mod coverage;
pub mod domain;
pub mod payments;
pub mod web;
