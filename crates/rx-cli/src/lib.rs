//! Library components shared by the `rx` binary.

pub mod logging;
