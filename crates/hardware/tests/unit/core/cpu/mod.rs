//! # CPU Execution Tests
//!
//! Whole-instruction behaviour driven through the `TestContext` harness.
