use crate::camera::Camera;
use crate::entity::Entity;
use crate::grid::{GridWorld, TileKind};

/// Paint layer on a depth tie. Declaration order is the paint order, so the
/// derived `Ord` is the whole tiebreak rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DrawLayer {
    Tile,
    Resource,
    Monster,
    Player,
}

/// Total draw order: depth cell sum `x + y` first, then layer. Derived
/// lexicographic `Ord` does exactly that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DepthKey {
    pub cell_sum: i32,
    pub layer: DrawLayer,
}

/// What an item draws: a tile kind, or a slot in the caller's monster or
/// resource slice. Slot indices stay stable because collected resources are
/// flagged, not removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSource {
    Tile(TileKind),
    Resource { index: usize },
    Monster { index: usize },
    Player,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub screen_x: i32,
    pub screen_y: i32,
    pub cell: (i32, i32),
    pub depth: DepthKey,
    pub source: DrawSource,
    pub frame_index: usize,
}

/// Builds the back-to-front draw list for one frame. The item buffer is
/// reused across calls.
#[derive(Debug, Default)]
pub struct DrawListBuilder {
    items: Vec<DrawItem>,
}

impl DrawListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(
        &mut self,
        grid: &GridWorld,
        camera: &Camera,
        player: &Entity,
        monsters: &[Entity],
        resources: &[Entity],
    ) -> &[DrawItem] {
        self.items.clear();

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if let Some(tile) = grid.tile_at(x, y) {
                    self.push(
                        camera,
                        (x as i32, y as i32),
                        DrawLayer::Tile,
                        DrawSource::Tile(tile),
                        0,
                    );
                }
            }
        }
        for (index, resource) in resources.iter().enumerate() {
            if resource.is_collected() {
                continue;
            }
            self.push(
                camera,
                resource.position(),
                DrawLayer::Resource,
                DrawSource::Resource { index },
                resource.frame_index(),
            );
        }
        for (index, monster) in monsters.iter().enumerate() {
            self.push(
                camera,
                monster.position(),
                DrawLayer::Monster,
                DrawSource::Monster { index },
                monster.frame_index(),
            );
        }
        self.push(
            camera,
            player.position(),
            DrawLayer::Player,
            DrawSource::Player,
            player.frame_index(),
        );

        self.items.sort_by_key(|item| item.depth);
        &self.items
    }

    fn push(
        &mut self,
        camera: &Camera,
        cell: (i32, i32),
        layer: DrawLayer,
        source: DrawSource,
        frame_index: usize,
    ) {
        let (screen_x, screen_y) = camera.world_to_screen(cell.0 as f32, cell.1 as f32);
        self.items.push(DrawItem {
            screen_x,
            screen_y,
            cell,
            depth: DepthKey {
                cell_sum: cell.0 + cell.1,
                layer,
            },
            source,
            frame_index,
        });
    }
}
