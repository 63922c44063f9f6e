//! hosts-toggle - switch marked blocks of the hosts file on and off.

pub mod cli;
pub mod config;
pub mod error;
pub mod hosts;
pub mod logging;
pub mod platform;
pub mod privilege;
pub mod report;
