//! Promethee Cluster - Preference-based clustering of alternatives
//!
//! This crate implements PROMETHEE outranking flows, PrometheeTri sorting
//! and an iterative clustering loop that groups alternatives around median
//! category profiles.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
