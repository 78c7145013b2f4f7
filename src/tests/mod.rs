//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn objective()`
//! * `fn constraints()`
//! * `fn tableau_form()`
//! * `fn matrix_form()`
pub mod problem_1;
