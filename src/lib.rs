//! Quran Tracker - Group progress for a 30-day reading schedule
//!
//! This crate tracks which days of a shared 30-day schedule each member of a
//! group has completed, and serves that state over a small JSON API backed by
//! SQLite.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
