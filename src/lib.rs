//! Walking, jumping and enemy bouncing for Avian-driven bodies in Bevy.

pub mod config;
pub mod movement;
pub mod stage;
