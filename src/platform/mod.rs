// dbgfold - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, util.
// Must NOT depend on: core, app.

pub mod fs;
