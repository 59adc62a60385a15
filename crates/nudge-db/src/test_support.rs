//! Shared test utilities for nudge-db unit tests.
