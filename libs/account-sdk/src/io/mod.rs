//! Interactions with the network.

pub mod network;
