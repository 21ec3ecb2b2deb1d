//! Library side of the `tdmd` binary: inspection views and logging setup.

pub mod logging;
pub mod views;
