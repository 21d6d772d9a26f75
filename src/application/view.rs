use serde::{Deserialize, Serialize};

/// View parameters a front-end keeps between sessions.
/// Pure data; pan and zoom arithmetic lives with the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    /// Screen position of the top-left corner of cell (0, 0)
    pub camera_pos: (f32, f32),
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    pub pan_speed: f32,
    pub screen_size: (u32, u32),
}

impl View {
    pub const DEFAULT_CELL_SIZE: u32 = 40;
    pub const DEFAULT_SCREEN_SIZE: (u32, u32) = (1600, 900);
    pub const DEFAULT_PAN_SPEED: f32 = 0.1;

    /// Camera placed so a `field_size` square field sits in the middle of
    /// the screen
    pub fn centered(field_size: usize, cell_size: u32, screen_size: (u32, u32)) -> Self {
        let extent = field_size as f32 * cell_size as f32;
        Self {
            camera_pos: (
                -(extent - screen_size.0 as f32) / 2.0,
                -(extent - screen_size.1 as f32) / 2.0,
            ),
            cell_size,
            pan_speed: Self::DEFAULT_PAN_SPEED,
            screen_size,
        }
    }
}

impl Default for View {
    fn default() -> Self {
        Self::centered(100, Self::DEFAULT_CELL_SIZE, Self::DEFAULT_SCREEN_SIZE)
    }
}
