use crate::animation::{AnimState, AnimationState, Facing, SpriteFrames};
use crate::grid::GridWorld;
use crate::rotation::rotate_point_90_cw;

pub const PLAYER_HP: i32 = 30;
pub const MONSTER_HP: i32 = 8;
pub const PLAYER_WALK_INTERVAL_MS: f32 = 120.0;
pub const MONSTER_WALK_INTERVAL_MS: f32 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Monster,
    Resource,
}

/// A grid-dwelling entity. Owns its animation state; nothing outside the
/// entity mutates that state except through the documented transitions.
#[derive(Debug, Clone)]
pub struct Entity {
    kind: EntityKind,
    x: i32,
    y: i32,
    hp: i32,
    collected: bool,
    frames: SpriteFrames,
    anim: AnimationState,
}

impl Entity {
    pub fn player(x: i32, y: i32, frames: SpriteFrames) -> Self {
        Self::new(EntityKind::Player, x, y, PLAYER_HP, frames, PLAYER_WALK_INTERVAL_MS)
    }

    pub fn monster(x: i32, y: i32, frames: SpriteFrames) -> Self {
        Self::new(EntityKind::Monster, x, y, MONSTER_HP, frames, MONSTER_WALK_INTERVAL_MS)
    }

    pub fn resource(x: i32, y: i32) -> Self {
        Self::new(EntityKind::Resource, x, y, 1, SpriteFrames::Static, PLAYER_WALK_INTERVAL_MS)
    }

    fn new(
        kind: EntityKind,
        x: i32,
        y: i32,
        hp: i32,
        frames: SpriteFrames,
        walk_interval_ms: f32,
    ) -> Self {
        Self {
            kind,
            x,
            y,
            hp,
            collected: false,
            frames,
            anim: AnimationState::new(walk_interval_ms),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn facing(&self) -> Facing {
        self.anim.facing()
    }

    pub fn anim_state(&self) -> AnimState {
        self.anim.state()
    }

    pub fn frames(&self) -> &SpriteFrames {
        &self.frames
    }

    /// Frame index already wrapped into the active (state, facing) count.
    pub fn frame_index(&self) -> usize {
        let count = self.frames.frame_count(self.anim.state(), self.anim.facing());
        self.anim.frame_index() % count
    }

    /// Attempts a one-cell step. Out-of-bounds targets are rejected
    /// silently; the failure result is the only signal. An accepted move
    /// drives the animation transition.
    pub fn try_move(&mut self, dx: i32, dy: i32, grid: &GridWorld) -> bool {
        let nx = self.x + dx;
        let ny = self.y + dy;
        if !grid.in_bounds(nx, ny) {
            return false;
        }
        self.x = nx;
        self.y = ny;
        self.anim.record_accepted_move(dx, dy);
        true
    }

    pub fn set_facing_direction(&mut self, dx: i32, dy: i32) {
        self.anim.set_facing_from_delta(dx, dy);
    }

    pub fn update_animation(&mut self, dt_ms: f32) {
        self.anim.update(dt_ms, &self.frames);
    }

    /// Remaps position and facing through one clockwise world rotation.
    /// Callers pass the PRE-rotation grid dimensions.
    pub fn apply_rotation(&mut self, pre_width: u32, pre_height: u32) {
        let (x, y) = rotate_point_90_cw(self.x, self.y, pre_width, pre_height);
        self.x = x;
        self.y = y;
        self.anim.apply_world_rotation();
    }

    /// Returns true when the hit was lethal.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        self.hp -= amount;
        self.hp <= 0
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    pub fn mark_collected(&mut self) {
        self.collected = true;
    }
}
