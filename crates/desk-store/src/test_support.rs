//! Shared test utilities for desk-store.
