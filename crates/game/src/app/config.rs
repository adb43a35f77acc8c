use std::fs;
use std::path::Path;

use serde::Deserialize;

pub type ConfigResult<T> = Result<T, String>;

const MAP_WIDTH_DEFAULT: u32 = 40;
const MAP_HEIGHT_DEFAULT: u32 = 40;
const SCREEN_WIDTH_DEFAULT: u32 = 1600;
const SCREEN_HEIGHT_DEFAULT: u32 = 900;
const TILE_WIDTH_DEFAULT: u32 = 128;
const TILE_HEIGHT_DEFAULT: u32 = 64;
const MONSTER_COUNT_DEFAULT: u32 = 60;
const RESOURCE_COUNT_DEFAULT: u32 = 120;
const SEED_DEFAULT: u64 = 0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub map_width: u32,
    pub map_height: u32,
    pub screen_width: u32,
    pub screen_height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub monster_count: u32,
    pub resource_count: u32,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_width: MAP_WIDTH_DEFAULT,
            map_height: MAP_HEIGHT_DEFAULT,
            screen_width: SCREEN_WIDTH_DEFAULT,
            screen_height: SCREEN_HEIGHT_DEFAULT,
            tile_width: TILE_WIDTH_DEFAULT,
            tile_height: TILE_HEIGHT_DEFAULT,
            monster_count: MONSTER_COUNT_DEFAULT,
            resource_count: RESOURCE_COUNT_DEFAULT,
            seed: SEED_DEFAULT,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|error| format!("read config '{}': {error}", path.display()))?;
        let config = Self::parse_json(&raw)?;
        config.validate()?;
        Ok(config)
    }

    fn parse_json(raw: &str) -> ConfigResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        match serde_path_to_error::deserialize::<_, GameConfig>(&mut deserializer) {
            Ok(config) => Ok(config),
            Err(error) => {
                let path = error.path().to_string();
                let source = error.into_inner();
                if path.is_empty() || path == "." {
                    Err(format!("parse config json: {source}"))
                } else {
                    Err(format!("parse config json at {path}: {source}"))
                }
            }
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.map_width == 0 || self.map_height == 0 {
            return Err(format!(
                "map dimensions must be positive, got {}x{}",
                self.map_width, self.map_height
            ));
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(format!(
                "screen dimensions must be positive, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(format!(
                "tile dimensions must be positive, got {}x{}",
                self.tile_width, self.tile_height
            ));
        }
        let cells = self.map_width as u64 * self.map_height as u64;
        let occupants = self.monster_count as u64 + self.resource_count as u64 + 1;
        if occupants > cells {
            return Err(format!(
                "map has {cells} cells but {occupants} entities were requested"
            ));
        }
        Ok(())
    }
}
