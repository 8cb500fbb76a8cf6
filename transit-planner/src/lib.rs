//! Transit trip planner with transfer-window fares.
//!
//! Finds the fastest route between two stations of a zoned transit network
//! and prices it against the rider's open fare session: within the transfer
//! window a rider pays only for zones they have not already paid for.
//!
//! The library is split the way data flows through it:
//!
//! - [`data`] loads stations, edges and fares from JSON
//! - [`network`] holds the station graph
//! - [`planner`] routes a trip and derives its zones, mode and lines
//! - [`fare`] prices a trip against a [`fare::FareSession`]
//! - [`cli`] and [`web`] expose the planner interactively and over HTTP

pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod fare;
pub mod logging;
pub mod network;
pub mod planner;
pub mod sessions;
pub mod web;
