//! Adapter utilities for the `shifted-grid` crate.
//!
//! The `shifted-grid` crate is UI-agnostic and focuses on layout and view recycling. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A [`Controller`] that owns the grid and routes UI events into it
//! - Tween-based smooth scrolling to a position (adapter-driven, one tick per frame)
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod tween;


pub use controller::Controller;
pub use tween::{Easing, Tween};
