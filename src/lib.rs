//! Platform-independent core for the Sundial wall-clock device.
//!
//! Joins a wireless network, fetches epoch time from a network time
//! source, and commits it to a battery-backed hardware clock. All
//! hardware is reached through trait seams so the logic runs unchanged
//! against real drivers or host-side fakes.

#![no_std]

pub mod link;
pub mod status;
pub mod timesync;
