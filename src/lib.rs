//! An ordered set backed by a top-down splay tree.

#[macro_use]
extern crate log;

pub mod splay_tree;
