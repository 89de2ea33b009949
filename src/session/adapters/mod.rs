//! Adapter implementations for the session store port.

pub mod memory;
