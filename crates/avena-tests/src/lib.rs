//! Integration tests for avena crates.
//!
//! End-to-end scenarios that run whole images through the operators in
//! `avena-ops` and check the results with the channel helpers in
//! `avena-core`.
