//! Test utilities and fixtures for Orrery development.
//!
//! Provides a stock celestial system with a realistic star/planet/moon
//! shape, a recording change callback ([`NotificationLog`]), and a
//! localizer that echoes template keys and arguments
//! ([`EchoLocalizer`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{stock_system, EchoLocalizer, NotificationLog, StockSystem};
