pub const ZOOM_DEFAULT: f32 = 1.0;
pub const ZOOM_MIN: f32 = 0.3;
pub const ZOOM_MAX: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.1;

/// 2:1 isometric camera. World cell (wx, wy) projects to
/// `sx = (wx - wy) * effTileW / 2 - offsetX + screenW / 2` and
/// `sy = (wx + wy) * effTileH / 2 - offsetY + screenH / 2`, where the
/// effective tile size is the base tile size scaled by the current zoom.
///
/// All intermediate math stays in f32 so `screen_to_world` is the exact
/// algebraic inverse; truncation toward zero happens only at the integer
/// output boundary of `world_to_screen`.
#[derive(Debug, Clone)]
pub struct Camera {
    offset_x: f32,
    offset_y: f32,
    zoom: f32,
    tile_width: f32,
    tile_height: f32,
    screen_width: f32,
    screen_height: f32,
}

impl Camera {
    pub fn new(tile_size: (u32, u32), screen_size: (u32, u32)) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: ZOOM_DEFAULT,
            tile_width: tile_size.0 as f32,
            tile_height: tile_size.1 as f32,
            screen_width: screen_size.0 as f32,
            screen_height: screen_size.1 as f32,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    fn effective_half_tile(&self) -> (f32, f32) {
        (
            self.tile_width * self.zoom * 0.5,
            self.tile_height * self.zoom * 0.5,
        )
    }

    pub fn world_to_screen(&self, wx: f32, wy: f32) -> (i32, i32) {
        let (sx, sy) = self.project(wx, wy);
        (sx as i32, sy as i32)
    }

    fn project(&self, wx: f32, wy: f32) -> (f32, f32) {
        let (half_w, half_h) = self.effective_half_tile();
        let sx = (wx - wy) * half_w - self.offset_x + self.screen_width * 0.5;
        let sy = (wx + wy) * half_h - self.offset_y + self.screen_height * 0.5;
        (sx, sy)
    }

    pub fn screen_to_world(&self, sx: f32, sy: f32) -> (f32, f32) {
        let (half_w, half_h) = self.effective_half_tile();
        let rel_x = (sx + self.offset_x - self.screen_width * 0.5) / half_w;
        let rel_y = (sy + self.offset_y - self.screen_height * 0.5) / half_h;
        let wx = (rel_x + rel_y) * 0.5;
        let wy = (rel_y - rel_x) * 0.5;
        (wx, wy)
    }

    /// Snaps the offset so the given world point projects to the exact
    /// center of the viewport.
    pub fn center_on(&mut self, wx: f32, wy: f32) {
        let (half_w, half_h) = self.effective_half_tile();
        self.offset_x = (wx - wy) * half_w;
        self.offset_y = (wx + wy) * half_h;
    }

    pub fn zoom_in(&mut self, amount: f32, anchor: Option<(f32, f32)>) {
        self.set_zoom(self.zoom + amount, anchor);
    }

    pub fn zoom_out(&mut self, amount: f32, anchor: Option<(f32, f32)>) {
        self.set_zoom(self.zoom - amount, anchor);
    }

    pub fn apply_zoom_steps(&mut self, steps: i32, anchor: Option<(f32, f32)>) {
        if steps == 0 {
            return;
        }
        self.set_zoom(self.zoom + steps as f32 * ZOOM_STEP, anchor);
    }

    /// Clamps the target into [ZOOM_MIN, ZOOM_MAX]; out-of-range targets are
    /// not an error. With an anchor, the world point under the anchor before
    /// the change projects back to the same screen point after it.
    pub fn set_zoom(&mut self, target: f32, anchor: Option<(f32, f32)>) {
        let clamped = clamp_zoom(target);
        let anchor = match anchor {
            Some(point) if (clamped - self.zoom).abs() > f32::EPSILON => point,
            _ => {
                self.zoom = clamped;
                return;
            }
        };
        let (ax, ay) = anchor;
        let (wx, wy) = self.screen_to_world(ax, ay);
        self.zoom = clamped;
        let (nx, ny) = self.project(wx, wy);
        self.offset_x += nx - ax;
        self.offset_y += ny - ay;
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = ZOOM_DEFAULT;
    }
}

fn clamp_zoom(zoom: f32) -> f32 {
    if !zoom.is_finite() {
        return ZOOM_DEFAULT;
    }
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}
