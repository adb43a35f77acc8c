use engine::{
    Camera, DrawItem, DrawListBuilder, Entity, FacingFrameCounts, GridWorld, MoveIntent,
    SpriteFrames,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::app::config::GameConfig;
use crate::app::worldgen;

pub const MAX_FRAME_DELTA_MS: f32 = 100.0;
pub const MOVE_COOLDOWN_MS: f32 = 140.0;
const MONSTER_WANDER_CHANCE: f64 = 0.015;
const ATTACK_DAMAGE: i32 = 6;

/// Frame counts for the animated sprite sets. Stands in for the asset
/// loader; the renderer resolves actual frame handles from these counts.
#[derive(Debug, Clone, Copy)]
pub struct SpriteCatalog {
    pub player: SpriteFrames,
    pub monster: SpriteFrames,
}

impl Default for SpriteCatalog {
    fn default() -> Self {
        Self {
            player: SpriteFrames::Directional {
                idle: FacingFrameCounts::uniform(2),
                walk: FacingFrameCounts::uniform(4),
            },
            monster: SpriteFrames::Directional {
                idle: FacingFrameCounts::uniform(2),
                walk: FacingFrameCounts::uniform(2),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    CoolingDown,
    OutOfBounds,
}

/// One running world: grid, camera, entities, and the per-frame state that
/// ties them together. Single-threaded; every mutation happens inside the
/// synchronous update/input calls.
pub struct GameSession {
    grid: GridWorld,
    camera: Camera,
    player: Entity,
    monsters: Vec<Entity>,
    resources: Vec<Entity>,
    draw_list: DrawListBuilder,
    rng: StdRng,
    move_cooldown_ms: f32,
    gathered_count: u32,
}

impl GameSession {
    pub fn new(config: &GameConfig, catalog: &SpriteCatalog) -> Result<Self, String> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let grid = worldgen::generate_grid(&mut rng, config.map_width, config.map_height)
            .map_err(|error| format!("generate grid: {error}"))?;
        let player_cell = (config.map_width as i32 / 2, config.map_height as i32 / 2);
        let player = Entity::player(player_cell.0, player_cell.1, catalog.player);
        let monsters = worldgen::spawn_monsters(
            &mut rng,
            &grid,
            config.monster_count,
            catalog.monster,
            player_cell,
        );
        let resources = worldgen::spawn_resources(
            &mut rng,
            &grid,
            config.resource_count,
            player_cell,
            &monsters,
        );
        let mut camera = Camera::new(
            (config.tile_width, config.tile_height),
            (config.screen_width, config.screen_height),
        );
        camera.center_on(player_cell.0 as f32, player_cell.1 as f32);
        info!(
            map_width = grid.width(),
            map_height = grid.height(),
            monsters = monsters.len(),
            resources = resources.len(),
            seed = config.seed,
            "session_created"
        );
        Ok(Self {
            grid,
            camera,
            player,
            monsters,
            resources,
            draw_list: DrawListBuilder::new(),
            rng,
            move_cooldown_ms: 0.0,
            gathered_count: 0,
        })
    }

    pub fn grid(&self) -> &GridWorld {
        &self.grid
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn monsters(&self) -> &[Entity] {
        &self.monsters
    }

    pub fn resources(&self) -> &[Entity] {
        &self.resources
    }

    pub fn gathered_count(&self) -> u32 {
        self.gathered_count
    }

    /// Advances one frame. The delta is capped first so a stall cannot
    /// teleport timers past their windows.
    pub fn update(&mut self, dt_ms: f32) {
        let dt_ms = dt_ms.min(MAX_FRAME_DELTA_MS);
        self.move_cooldown_ms = (self.move_cooldown_ms - dt_ms).max(0.0);
        self.player.update_animation(dt_ms);
        for index in 0..self.monsters.len() {
            self.wander(index);
            self.monsters[index].update_animation(dt_ms);
        }
        let (px, py) = self.player.position();
        self.camera.center_on(px as f32, py as f32);
    }

    fn wander(&mut self, index: usize) {
        if !self.rng.gen_bool(MONSTER_WANDER_CHANCE) {
            return;
        }
        let (dx, dy) = match self.rng.gen_range(0..4_u8) {
            0 => (0, -1),
            1 => (0, 1),
            2 => (-1, 0),
            _ => (1, 0),
        };
        self.monsters[index].try_move(dx, dy, &self.grid);
    }

    pub fn try_move_player(&mut self, intent: MoveIntent) -> MoveOutcome {
        if self.move_cooldown_ms > 0.0 {
            return MoveOutcome::CoolingDown;
        }
        let (dx, dy) = intent.delta();
        if !self.player.try_move(dx, dy, &self.grid) {
            return MoveOutcome::OutOfBounds;
        }
        self.move_cooldown_ms = MOVE_COOLDOWN_MS;
        MoveOutcome::Moved
    }

    /// Rotates the whole world a quarter turn clockwise: grid first, then
    /// every entity remapped with the PRE-rotation dimensions, then the
    /// camera recentered on the player. No caller observes a partial
    /// rotation.
    pub fn rotate_world_90(&mut self) {
        let pre_width = self.grid.width();
        let pre_height = self.grid.height();
        self.grid.rotate_90_cw();
        self.player.apply_rotation(pre_width, pre_height);
        for monster in &mut self.monsters {
            monster.apply_rotation(pre_width, pre_height);
        }
        for resource in &mut self.resources {
            resource.apply_rotation(pre_width, pre_height);
        }
        let (px, py) = self.player.position();
        self.camera.center_on(px as f32, py as f32);
        info!(rotation_count = self.grid.rotation_count(), "world_rotated");
    }

    /// Strikes every monster within Manhattan distance 1 of the player.
    /// Returns how many died.
    pub fn attack_adjacent(&mut self) -> u32 {
        let (px, py) = self.player.position();
        let mut kills = 0;
        self.monsters.retain_mut(|monster| {
            let (mx, my) = monster.position();
            let adjacent = (px - mx).abs() + (py - my).abs() == 1;
            if adjacent && monster.apply_damage(ATTACK_DAMAGE) {
                kills += 1;
                return false;
            }
            true
        });
        if kills > 0 {
            debug!(kills, "monsters_slain");
        }
        kills
    }

    /// Collects one uncollected resource on the player's cell, if any.
    pub fn gather_at_player(&mut self) -> bool {
        let cell = self.player.position();
        let found = self
            .resources
            .iter_mut()
            .find(|resource| !resource.is_collected() && resource.position() == cell);
        match found {
            Some(resource) => {
                resource.mark_collected();
                self.gathered_count += 1;
                debug!(total = self.gathered_count, "resource_gathered");
                true
            }
            None => false,
        }
    }

    pub fn build_draw_list(&mut self) -> &[DrawItem] {
        self.draw_list.build(
            &self.grid,
            &self.camera,
            &self.player,
            &self.monsters,
            &self.resources,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{rotate_point_90_cw, AnimState, DrawSource};

    fn small_config() -> GameConfig {
        GameConfig {
            map_width: 10,
            map_height: 10,
            monster_count: 4,
            resource_count: 6,
            seed: 11,
            ..GameConfig::default()
        }
    }

    fn quiet_config() -> GameConfig {
        GameConfig {
            monster_count: 0,
            resource_count: 0,
            ..small_config()
        }
    }

    fn session(config: &GameConfig) -> GameSession {
        GameSession::new(config, &SpriteCatalog::default()).expect("session")
    }

    #[test]
    fn new_session_centers_player_and_spawns_everything() {
        let config = small_config();
        let session = session(&config);
        assert_eq!(session.player().position(), (5, 5));
        assert_eq!(session.monsters().len(), 4);
        assert_eq!(session.resources().len(), 6);
        let (sx, sy) = session.camera().world_to_screen(5.0, 5.0);
        assert_eq!((sx, sy), (800, 450));
    }

    #[test]
    fn movement_honors_the_cooldown() {
        let mut session = session(&quiet_config());
        assert_eq!(session.try_move_player(MoveIntent::East), MoveOutcome::Moved);
        assert_eq!(
            session.try_move_player(MoveIntent::East),
            MoveOutcome::CoolingDown
        );
        session.update(MOVE_COOLDOWN_MS);
        assert_eq!(session.try_move_player(MoveIntent::East), MoveOutcome::Moved);
        assert_eq!(session.player().position(), (7, 5));
    }

    #[test]
    fn out_of_bounds_move_fails_without_consuming_cooldown() {
        let mut session = session(&quiet_config());
        for _ in 0..10 {
            session.update(MOVE_COOLDOWN_MS);
            session.try_move_player(MoveIntent::West);
        }
        assert_eq!(session.player().position(), (0, 5));
        session.update(MOVE_COOLDOWN_MS);
        assert_eq!(
            session.try_move_player(MoveIntent::West),
            MoveOutcome::OutOfBounds
        );
        assert_eq!(
            session.try_move_player(MoveIntent::East),
            MoveOutcome::Moved
        );
    }

    #[test]
    fn frame_delta_is_capped_before_timers_run() {
        let mut session = session(&quiet_config());
        session.try_move_player(MoveIntent::East);
        assert_eq!(session.player().anim_state(), AnimState::Walk);
        // A 10-second stall counts as one capped tick, not enough to
        // finish the cooldown.
        session.update(10_000.0);
        assert_eq!(
            session.try_move_player(MoveIntent::East),
            MoveOutcome::CoolingDown
        );
    }

    #[test]
    fn rotation_matches_the_point_transform_with_pre_dims() {
        let config = small_config();
        let mut session = session(&config);
        let pre_w = session.grid().width();
        let pre_h = session.grid().height();
        let expected: Vec<(i32, i32)> = session
            .monsters()
            .iter()
            .map(|monster| {
                let (x, y) = monster.position();
                rotate_point_90_cw(x, y, pre_w, pre_h)
            })
            .collect();
        session.rotate_world_90();
        let actual: Vec<(i32, i32)> = session
            .monsters()
            .iter()
            .map(|monster| monster.position())
            .collect();
        assert_eq!(actual, expected);
        assert_eq!(session.grid().rotation_count(), 1);
    }

    #[test]
    fn rotation_recenters_camera_on_the_player() {
        let mut session = session(&quiet_config());
        session.update(MOVE_COOLDOWN_MS);
        session.try_move_player(MoveIntent::North);
        session.rotate_world_90();
        let (px, py) = session.player().position();
        let center = session
            .camera()
            .world_to_screen(px as f32, py as f32);
        assert_eq!(center, (800, 450));
    }

    #[test]
    fn four_rotations_restore_interior_entity_positions() {
        let config = small_config();
        let mut session = session(&config);
        let before: Vec<(i32, i32)> = session
            .monsters()
            .iter()
            .map(|monster| monster.position())
            .collect();
        for _ in 0..4 {
            session.rotate_world_90();
        }
        let after: Vec<(i32, i32)> = session
            .monsters()
            .iter()
            .map(|monster| monster.position())
            .collect();
        assert_eq!(after, before);
        assert_eq!(session.grid().rotation_count(), 0);
    }

    #[test]
    fn attack_kills_adjacent_monster_after_two_hits() {
        let mut session = session(&quiet_config());
        session.monsters.push(Entity::monster(
            6,
            5,
            SpriteCatalog::default().monster,
        ));
        assert_eq!(session.attack_adjacent(), 0);
        assert_eq!(session.monsters()[0].hp(), engine::MONSTER_HP - ATTACK_DAMAGE);
        assert_eq!(session.attack_adjacent(), 1);
        assert!(session.monsters().is_empty());
    }

    #[test]
    fn attack_ignores_distant_monsters() {
        let mut session = session(&quiet_config());
        session.monsters.push(Entity::monster(
            7,
            5,
            SpriteCatalog::default().monster,
        ));
        assert_eq!(session.attack_adjacent(), 0);
        assert_eq!(session.monsters()[0].hp(), engine::MONSTER_HP);
    }

    #[test]
    fn gathering_removes_the_resource_from_the_draw_list() {
        let mut session = session(&quiet_config());
        session.resources.push(Entity::resource(5, 5));
        assert!(session.gather_at_player());
        assert_eq!(session.gathered_count(), 1);
        assert!(!session.gather_at_player());
        let has_resource_item = session
            .build_draw_list()
            .iter()
            .any(|item| matches!(item.source, DrawSource::Resource { .. }));
        assert!(!has_resource_item);
    }

    #[test]
    fn draw_list_covers_tiles_and_live_entities() {
        let config = small_config();
        let mut session = session(&config);
        let expected =
            (config.map_width * config.map_height + config.monster_count + config.resource_count)
                as usize
                + 1;
        assert_eq!(session.build_draw_list().len(), expected);
    }
}
