#![deny(warnings)]
pub mod model;
pub mod pattern;
pub mod search;
