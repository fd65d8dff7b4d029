//! # wordcount
//!
//! Bounded-concurrency word counting across local files and HTTP URLs.
//!
//! One task is spawned per source, capped by a counting semaphore; results
//! fan in to a single aggregator that returns every record or the first
//! error, aborting whatever is still in flight.

pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod model;
pub mod reader;
pub mod sema;
pub mod telemetry;
