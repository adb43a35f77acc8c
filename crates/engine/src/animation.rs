pub const IDLE_TIMEOUT_MS: f32 = 200.0;
pub const WALK_DURATION_CAP_MS: f32 = 180.0;
pub const IDLE_INTERVAL_MULTIPLIER: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    North,
    South,
    East,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimState {
    Idle,
    Walk,
}

/// Frame counts per facing for one animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacingFrameCounts {
    pub north: usize,
    pub south: usize,
    pub east: usize,
    pub west: usize,
}

impl FacingFrameCounts {
    pub const fn uniform(count: usize) -> Self {
        Self {
            north: count,
            south: count,
            east: count,
            west: count,
        }
    }

    pub fn get(self, facing: Facing) -> usize {
        match facing {
            Facing::North => self.north,
            Facing::South => self.south,
            Facing::East => self.east,
            Facing::West => self.west,
        }
    }
}

/// Tagged sprite shape. `Static` sprites have one fixed frame and skip the
/// animation machine entirely; `Directional` sprites carry per-state,
/// per-facing frame counts. Frame handles themselves live in the asset
/// layer; the core only needs the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteFrames {
    Static,
    Directional {
        idle: FacingFrameCounts,
        walk: FacingFrameCounts,
    },
}

impl SpriteFrames {
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static)
    }

    pub fn frame_count(&self, state: AnimState, facing: Facing) -> usize {
        let count = match self {
            Self::Static => 1,
            Self::Directional { idle, walk } => match state {
                AnimState::Idle => idle.get(facing),
                AnimState::Walk => walk.get(facing),
            },
        };
        count.max(1)
    }
}

/// Idle/walk state machine owned by an entity. Transitions:
/// - accepted move: set facing, enter Walk with frame 0 and zeroed timers;
/// - Walk exits to Idle when no accepted move arrives within
///   [`IDLE_TIMEOUT_MS`], or the walk-duration timer passes
///   [`WALK_DURATION_CAP_MS`] (the in-machine guard against input
///   disappearing mid-walk).
///
/// The idle frame interval is the walk interval times
/// [`IDLE_INTERVAL_MULTIPLIER`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    state: AnimState,
    facing: Facing,
    frame_index: usize,
    frame_timer_ms: f32,
    since_last_move_ms: f32,
    walk_elapsed_ms: f32,
    walk_interval_ms: f32,
}

impl AnimationState {
    pub fn new(walk_interval_ms: f32) -> Self {
        Self {
            state: AnimState::Idle,
            facing: Facing::South,
            frame_index: 0,
            frame_timer_ms: 0.0,
            since_last_move_ms: 0.0,
            walk_elapsed_ms: 0.0,
            walk_interval_ms,
        }
    }

    pub fn state(&self) -> AnimState {
        self.state
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Raw frame index; wrap modulo the active frame count at lookup.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame_interval_ms(&self) -> f32 {
        match self.state {
            AnimState::Idle => self.walk_interval_ms * IDLE_INTERVAL_MULTIPLIER,
            AnimState::Walk => self.walk_interval_ms,
        }
    }

    /// Resolves facing from a movement delta. When both axes are nonzero
    /// the vertical axis wins, the same rule the intent layer applies.
    pub fn set_facing_from_delta(&mut self, dx: i32, dy: i32) {
        if dy < 0 {
            self.facing = Facing::North;
        } else if dy > 0 {
            self.facing = Facing::South;
        } else if dx < 0 {
            self.facing = Facing::West;
        } else if dx > 0 {
            self.facing = Facing::East;
        }
    }

    pub fn record_accepted_move(&mut self, dx: i32, dy: i32) {
        self.set_facing_from_delta(dx, dy);
        self.since_last_move_ms = 0.0;
        self.walk_elapsed_ms = 0.0;
        if self.state != AnimState::Walk {
            self.enter(AnimState::Walk);
        }
    }

    /// Rotates the facing with the world; position remapping is the
    /// entity's concern.
    pub fn apply_world_rotation(&mut self) {
        self.facing = crate::rotation::rotate_facing_90_cw(self.facing);
    }

    pub fn update(&mut self, dt_ms: f32, frames: &SpriteFrames) {
        if frames.is_static() {
            return;
        }
        self.since_last_move_ms += dt_ms;
        if self.state == AnimState::Walk {
            self.walk_elapsed_ms += dt_ms;
            if self.since_last_move_ms > IDLE_TIMEOUT_MS
                || self.walk_elapsed_ms > WALK_DURATION_CAP_MS
            {
                self.enter(AnimState::Idle);
            }
        }
        let count = frames.frame_count(self.state, self.facing);
        if count <= 1 {
            return;
        }
        self.frame_timer_ms += dt_ms;
        if self.frame_timer_ms >= self.frame_interval_ms() {
            self.frame_timer_ms = 0.0;
            self.frame_index = (self.frame_index + 1) % count;
        }
    }

    fn enter(&mut self, state: AnimState) {
        self.state = state;
        self.frame_index = 0;
        self.frame_timer_ms = 0.0;
        if state == AnimState::Walk {
            self.walk_elapsed_ms = 0.0;
        }
    }
}
