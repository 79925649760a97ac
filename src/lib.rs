//! Marketplace Console - subscription lifecycle for a data-services marketplace
//!
//! Users subscribe to catalog products, cancel or soft-delete subscriptions,
//! and restore or permanently purge them from a deleted history. Active and
//! deleted records live in two disjoint collections persisted to key-value
//! storage, next to the favorites list and each user's profile edits.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
