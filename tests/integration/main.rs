//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a subsystem against mock
//! adapters.  All tests run on the host with no real hardware required.

mod decider_tests;
mod mock_hw;
mod scheduler_tests;
