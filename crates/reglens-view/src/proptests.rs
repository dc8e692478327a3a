//! Property-based tests for the view-model derivation.
