//! End-to-end tests for the Compliance Operator
//!
//! The [`test`] module contains the harness which the scenarios in `tests/`
//! are written against. Scenarios need a live OpenShift cluster and are
//! ignored by default; run them with `cargo test -- --ignored --test-threads=1`.
//! Several scenarios scan with the same profiles and must not overlap.
