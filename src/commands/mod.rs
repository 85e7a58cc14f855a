//! CLI commands for negcycle

pub mod arbitrage;
pub mod compare;
pub mod demo;
pub mod dispatch;
pub mod format;
pub mod run;
pub mod scenarios;
