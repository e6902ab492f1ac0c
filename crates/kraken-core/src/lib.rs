//! Core types and storage for the Kraken graph store.
//!
//! Provides the graph data model ([`graph::Graph`], [`node::Node`]), the
//! engine registry ([`engine::Engine`]), JSON file persistence, and TOML
//! configuration.

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod node;
pub mod schema;
pub mod storage;
