//! Movement domain: debug-only tracing of controller state changes.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::movement::{Dimension, Grounding, MovementController};

pub(crate) fn trace_state_changes<D: Dimension>(
    mut last_seen: Local<HashMap<Entity, (Grounding, bool)>>,
    query: Query<(Entity, &MovementController<D>)>,
) {
    for (entity, controller) in &query {
        let state = controller.state();
        let current = (state.grounding(), state.can_bounce);
        let Some(previous) = last_seen.insert(entity, current) else {
            continue;
        };

        if previous.0 != current.0 {
            match current.0 {
                Grounding::Grounded => debug!(
                    "Landed: entity={:?}, open_contacts={}",
                    entity,
                    state.contacts().open_contacts()
                ),
                Grounding::Airborne => debug!("Left ground: entity={:?}", entity),
            }
        }

        if previous.1 != current.1 {
            debug!("Bounce armed: entity={:?}, can_bounce={}", entity, current.1);
        }
    }

    last_seen.retain(|entity, _| query.contains(*entity));
}
