// dbgfold - core/mod.rs
//
// Core filtering logic.
// Dependencies: standard library and regex only.
// Must NOT depend on: platform, app, or the filesystem directly.

pub mod dedup;
pub mod extract;
pub mod filter;
pub mod sections;
