//! Filesystem utilities for the counter service.
//!
//! The counter file is only ever replaced wholesale, never edited in place, so
//! a reader observes either the previous document or the new one.

pub mod atomic;

pub use atomic::{atomic_write, sibling_with_extension};
