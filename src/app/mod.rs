// dbgfold - app/mod.rs
//
// Application layer: wires platform I/O to the core filter.

pub mod run;
