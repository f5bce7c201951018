// dbgfold - lib.rs
//
// Library entry point, exposing the filter modules for integration testing.
// The CLI front end lives in `main.rs`.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
