//! Language-level integration suites.

mod errors;
mod operations;
mod programs;
