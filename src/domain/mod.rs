//! Domain types: tunables, shape descriptors, page flow.

pub mod config;
pub mod pages;
pub mod shape;
