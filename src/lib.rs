//! Workasana: session-aware data layer for the Workasana task tracker.
//!
//! This crate sits between the task tracker's HTTP API and its screens. It
//! authenticates every call against the current session, fetches the
//! resources a screen needs concurrently, tolerates partial failure where a
//! resource is optional, and derives filtered, sorted and aggregated views
//! from the loaded data.
//!
//! # Architecture
//!
//! Workasana follows hexagonal architecture principles:
//!
//! - **Domain**: Pure data types and rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the session store and transport
//! - **Adapters**: Concrete implementations of ports (`reqwest`, in-memory)
//!
//! # Modules
//!
//! - [`reference`]: Normalization of heterogeneous entity references
//! - [`session`]: Session store, credential and display preferences
//! - [`gateway`]: Authenticated request gateway with session eviction
//! - [`fetch`]: Concurrent batch fetching, degrade policy and sequencing
//! - [`view`]: Filter, sort and roster derivation over loaded entities
//! - [`report`]: Report date ranges, day buckets and report snapshots
//! - [`api`]: Typed endpoints, form validation and sign-in flows
//! - [`screens`]: Screen batches and the sequenced screen loader
//! - [`config`]: Client configuration

pub mod api;
pub mod config;
pub mod fetch;
pub mod gateway;
pub mod reference;
pub mod report;
pub mod screens;
pub mod session;
pub mod view;
