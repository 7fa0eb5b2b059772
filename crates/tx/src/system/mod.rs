// Path: crates/tx/src/system/mod.rs

//! Core, non-optional system logic applied to every instruction.

pub mod authorization;
pub mod resolution;
pub mod validation;
