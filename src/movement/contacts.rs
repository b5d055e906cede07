//! Movement domain: contact classification by collision tag.

use bevy::prelude::Entity;
use std::collections::HashMap;

/// Tags a contact can carry that movement cares about.
pub const FLOOR_TAG: &str = "Floor";
pub const WALL_TAG: &str = "Wall";
pub const ENEMY_TAG: &str = "Enemy";

/// What a contact means for locomotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Floor or wall: the body may jump while touching it.
    Terrain,
    /// Enemy: arms the bounce on controllers that have it.
    Enemy,
    Other,
}

impl ContactKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            FLOOR_TAG | WALL_TAG => ContactKind::Terrain,
            ENEMY_TAG => ContactKind::Enemy,
            _ => ContactKind::Other,
        }
    }
}

/// Open contacts keyed by the entity touched, classified once when first seen.
///
/// An end is matched by entity, so it closes the right contact even if the
/// other collider has since lost its tag or been despawned. A persist for a
/// contact whose begin was never seen (for example a body spawned already
/// touching the floor) is adopted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactLedger {
    open: HashMap<Entity, ContactKind>,
}

impl ContactLedger {
    pub fn begin(&mut self, other: Entity, kind: ContactKind) {
        self.open.insert(other, kind);
    }

    pub fn persist(&mut self, other: Entity, kind: ContactKind) {
        self.open.entry(other).or_insert(kind);
    }

    /// Close the contact with `other`, returning how it was classified.
    pub fn end(&mut self, other: Entity) -> Option<ContactKind> {
        self.open.remove(&other)
    }

    pub fn touching_terrain(&self) -> bool {
        self.open.values().any(|kind| *kind == ContactKind::Terrain)
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn open_contacts(&self) -> usize {
        self.open.len()
    }

    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.open.keys().copied()
    }
}
