//! Movement domain: feeding collision messages into controllers.
//!
//! Starts and ends are applied before persisting contacts so that a contact
//! which ended this step is not re-asserted from stale data. Contacts are
//! then reconciled against `CollidingEntities`, which closes any contact
//! whose end was never delivered.

use avian2d::prelude as avian_2d;
use avian3d::prelude as avian_3d;
use bevy::ecs::entity::EntityHashSet;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{
    Dimension, MovementController, Planar, PlanarController, Spatial, SpatialController, Tag,
};

/// Tag of `entity`, or the empty tag for untagged or despawned colliders.
fn tag_of<'a>(tags: &'a Query<&Tag>, entity: Entity) -> &'a str {
    tags.get(entity).map(Tag::as_str).unwrap_or("")
}

fn sync_touching<D: Dimension>(
    controller: &mut MovementController<D>,
    touching: &EntityHashSet,
    tags: &Query<&Tag>,
) {
    for other in touching.iter() {
        controller.on_contact_persist(*other, tag_of(tags, *other));
    }
    controller.retain_contacts(|other| touching.contains(&other));
}

pub(crate) fn track_planar_contacts(
    mut collision_start_events: MessageReader<avian_2d::CollisionStart>,
    mut collision_end_events: MessageReader<avian_2d::CollisionEnd>,
    tags: Query<&Tag>,
    mut controllers: Query<(&mut PlanarController, &avian_2d::CollidingEntities)>,
) {
    for event in collision_start_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (body, other) in pairs {
            if let Ok((mut controller, _)) = controllers.get_mut(body) {
                controller.on_contact_begin(other, tag_of(&tags, other));
            }
        }
    }

    for event in collision_end_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (body, other) in pairs {
            if let Ok((mut controller, _)) = controllers.get_mut(body) {
                controller.on_contact_end(other);
            }
        }
    }

    for (mut controller, colliding) in &mut controllers {
        sync_touching::<Planar>(&mut controller, colliding, &tags);
    }
}

pub(crate) fn track_spatial_contacts(
    mut collision_start_events: MessageReader<avian_3d::CollisionStart>,
    mut collision_end_events: MessageReader<avian_3d::CollisionEnd>,
    tags: Query<&Tag>,
    mut controllers: Query<(&mut SpatialController, &avian_3d::CollidingEntities)>,
) {
    for event in collision_start_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (body, other) in pairs {
            if let Ok((mut controller, _)) = controllers.get_mut(body) {
                controller.on_contact_begin(other, tag_of(&tags, other));
            }
        }
    }

    for event in collision_end_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (body, other) in pairs {
            if let Ok((mut controller, _)) = controllers.get_mut(body) {
                controller.on_contact_end(other);
            }
        }
    }

    for (mut controller, colliding) in &mut controllers {
        sync_touching::<Spatial>(&mut controller, colliding, &tags);
    }
}
