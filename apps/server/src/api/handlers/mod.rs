//! Request handlers

pub mod policies;
