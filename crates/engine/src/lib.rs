pub mod animation;
pub mod camera;
pub mod draw_list;
pub mod entity;
pub mod grid;
pub mod input;
pub mod rotation;

pub use animation::{
    AnimState, AnimationState, Facing, FacingFrameCounts, SpriteFrames, IDLE_INTERVAL_MULTIPLIER,
    IDLE_TIMEOUT_MS, WALK_DURATION_CAP_MS,
};
pub use camera::{Camera, ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
pub use draw_list::{DepthKey, DrawItem, DrawLayer, DrawListBuilder, DrawSource};
pub use entity::{
    Entity, EntityKind, MONSTER_HP, MONSTER_WALK_INTERVAL_MS, PLAYER_HP, PLAYER_WALK_INTERVAL_MS,
};
pub use grid::{GridWorld, GridWorldError, TileKind};
pub use input::MoveIntent;
pub use rotation::{rotate_facing_90_cw, rotate_point_90_cw};
