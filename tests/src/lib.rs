//! Workspace test suite, one module per crate.
