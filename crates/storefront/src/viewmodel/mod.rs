//! View-model update entry points.
//!
//! Each shared snapshot has exactly one module through which it is
//! written: [`catalog`] for the product list, [`cart`] for the per-user
//! cart. Handlers call these instead of touching the snapshots directly,
//! so every writer is enumerable and the replace-on-confirmed-success
//! policy is enforced in one place.

pub mod cart;
pub mod catalog;
