//! Movement domain: engine-side components for locomotion.

use bevy::prelude::*;

use crate::movement::{ENEMY_TAG, FLOOR_TAG, WALL_TAG};

#[derive(Component, Debug)]
pub struct Player;

/// Collision tag of a collider, read by controllers when contacts begin,
/// persist and end.
#[derive(Component, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(pub String);

impl Tag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn floor() -> Self {
        Self::new(FLOOR_TAG)
    }

    pub fn wall() -> Self {
        Self::new(WALL_TAG)
    }

    pub fn enemy() -> Self {
        Self::new(ENEMY_TAG)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
