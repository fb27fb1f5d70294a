//! EV charging station finder.
//!
//! A web application that lists charging station locations and answers:
//! "Which station is closest to where I am right now?"

pub mod config;
pub mod domain;
pub mod nearest;
pub mod stations;
pub mod web;
