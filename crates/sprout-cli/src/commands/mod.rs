//! Command handlers.
//!
//! Each handler translates parsed arguments into core requests and renders
//! the result; no business logic lives here.

pub mod create;
