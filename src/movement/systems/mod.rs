//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{track_planar_contacts, track_spatial_contacts};
pub use input::KeyboardAxes;
pub(crate) use input::sample_input;
pub(crate) use movement::{
    audit_planar_bodies, audit_spatial_bodies, drive_planar_bodies, drive_spatial_bodies,
};
