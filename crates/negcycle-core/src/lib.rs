//! Negcycle Core Library
//!
//! Bellman-Ford style shortest paths and negative-cycle detection over
//! dense weighted graphs, with currency-arbitrage helpers.

pub mod arbitrage;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod scenarios;
