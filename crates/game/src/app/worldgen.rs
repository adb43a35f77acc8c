use std::collections::HashSet;

use engine::{Entity, GridWorld, GridWorldError, SpriteFrames, TileKind};
use rand::rngs::StdRng;
use rand::Rng;

const WATER_THRESHOLD: f32 = 0.06;
const STONE_THRESHOLD: f32 = 0.13;
const SAND_THRESHOLD: f32 = 0.2;
const PLACEMENT_ATTEMPTS: u32 = 100;

pub fn roll_tile(roll: f32) -> TileKind {
    if roll < WATER_THRESHOLD {
        TileKind::Water
    } else if roll < STONE_THRESHOLD {
        TileKind::Stone
    } else if roll < SAND_THRESHOLD {
        TileKind::Sand
    } else {
        TileKind::Grass
    }
}

pub fn generate_grid(rng: &mut StdRng, width: u32, height: u32) -> Result<GridWorld, GridWorldError> {
    GridWorld::from_fn(width, height, |_, _| roll_tile(rng.gen::<f32>()))
}

/// Monsters may share cells with each other but never spawn on the player.
/// Placement attempts are bounded, same as resources, so a map with no
/// usable cell spawns fewer monsters instead of spinning.
pub fn spawn_monsters(
    rng: &mut StdRng,
    grid: &GridWorld,
    count: u32,
    frames: SpriteFrames,
    player_cell: (i32, i32),
) -> Vec<Entity> {
    let mut monsters = Vec::with_capacity(count as usize);
    for _ in 0..count {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let x = rng.gen_range(0..grid.width()) as i32;
            let y = rng.gen_range(0..grid.height()) as i32;
            if (x, y) != player_cell {
                monsters.push(Entity::monster(x, y, frames));
                break;
            }
        }
    }
    monsters
}

/// Places resources on unique cells that hold neither the player nor a
/// monster. Placement gives up on a resource after a bounded number of
/// attempts so a crowded map cannot loop forever.
pub fn spawn_resources(
    rng: &mut StdRng,
    grid: &GridWorld,
    count: u32,
    player_cell: (i32, i32),
    monsters: &[Entity],
) -> Vec<Entity> {
    let mut occupied: HashSet<(i32, i32)> = monsters.iter().map(Entity::position).collect();
    occupied.insert(player_cell);
    let mut resources = Vec::with_capacity(count as usize);
    for _ in 0..count {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let x = rng.gen_range(0..grid.width()) as i32;
            let y = rng.gen_range(0..grid.height()) as i32;
            if occupied.insert((x, y)) {
                resources.push(Entity::resource(x, y));
                break;
            }
        }
    }
    resources
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::FacingFrameCounts;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn monster_frames() -> SpriteFrames {
        SpriteFrames::Directional {
            idle: FacingFrameCounts::uniform(2),
            walk: FacingFrameCounts::uniform(2),
        }
    }

    #[test]
    fn tile_rolls_map_to_kind_thresholds() {
        assert_eq!(roll_tile(0.0), TileKind::Water);
        assert_eq!(roll_tile(0.059), TileKind::Water);
        assert_eq!(roll_tile(0.06), TileKind::Stone);
        assert_eq!(roll_tile(0.129), TileKind::Stone);
        assert_eq!(roll_tile(0.13), TileKind::Sand);
        assert_eq!(roll_tile(0.199), TileKind::Sand);
        assert_eq!(roll_tile(0.2), TileKind::Grass);
        assert_eq!(roll_tile(0.99), TileKind::Grass);
    }

    #[test]
    fn grid_generation_is_deterministic_per_seed() {
        let first = generate_grid(&mut seeded(42), 10, 10).unwrap();
        let second = generate_grid(&mut seeded(42), 10, 10).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn monsters_spawn_in_bounds_and_off_the_player() {
        let grid = generate_grid(&mut seeded(1), 8, 8).unwrap();
        let player_cell = (4, 4);
        let monsters = spawn_monsters(&mut seeded(2), &grid, 20, monster_frames(), player_cell);
        assert_eq!(monsters.len(), 20);
        for monster in &monsters {
            let (x, y) = monster.position();
            assert!(grid.in_bounds(x, y));
            assert_ne!((x, y), player_cell);
        }
    }

    #[test]
    fn resources_land_on_unique_unoccupied_cells() {
        let grid = generate_grid(&mut seeded(3), 12, 12).unwrap();
        let player_cell = (6, 6);
        let monsters = spawn_monsters(&mut seeded(4), &grid, 10, monster_frames(), player_cell);
        let resources = spawn_resources(&mut seeded(5), &grid, 30, player_cell, &monsters);
        assert_eq!(resources.len(), 30);
        let cells: HashSet<(i32, i32)> = resources.iter().map(Entity::position).collect();
        assert_eq!(cells.len(), resources.len());
        assert!(!cells.contains(&player_cell));
        for monster in &monsters {
            assert!(!cells.contains(&monster.position()));
        }
    }

    #[test]
    fn single_cell_map_spawns_no_monsters_and_terminates() {
        let grid = generate_grid(&mut seeded(8), 1, 1).unwrap();
        let monsters = spawn_monsters(&mut seeded(9), &grid, 3, monster_frames(), (0, 0));
        assert!(monsters.is_empty());
    }

    #[test]
    fn crowded_map_gives_up_instead_of_looping() {
        let grid = generate_grid(&mut seeded(6), 2, 2).unwrap();
        let resources = spawn_resources(&mut seeded(7), &grid, 10, (0, 0), &[]);
        assert!(resources.len() <= 3);
    }
}
