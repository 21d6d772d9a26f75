//! JSON session file: the dense field plus the view and tempo settings.
//!
//! Keys match the files written by earlier versions of the program:
//! `steps`, `cameraPos`, `panSpeed`, `simulationSpeed`, `cellSize`,
//! `screenSize`, `fieldSize` and `field`. `boundary` is optional and
//! defaults to a frozen border.

use super::{PersistError, Result, or_fallback};
use crate::application::{Session, View};
use crate::domain::{Boundary, Cell, DenseGrid, Generation};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFile {
    pub steps: u64,
    #[serde(flatten)]
    pub view: View,
    /// Seconds between generations while running
    pub simulation_speed: f32,
    /// Number of rows in `field`
    pub field_size: usize,
    /// Rows of 0 (dead) and 1 (alive), top row first
    pub field: Vec<Vec<u8>>,
    #[serde(default)]
    pub boundary: Boundary,
}

impl SessionFile {
    pub const DEFAULT_FIELD_SIZE: usize = 100;
    pub const DEFAULT_SIMULATION_SPEED: f32 = 0.3;

    /// Capture a running session and its view
    pub fn from_session(session: &Session<DenseGrid>, view: &View) -> Self {
        let grid = &session.generation;
        Self {
            steps: session.steps,
            view: *view,
            simulation_speed: session.step_interval(),
            field_size: grid.dimensions().1,
            field: grid.to_rows(),
            boundary: grid.boundary(),
        }
    }

    /// Rebuild the dense grid, rejecting ragged rows, a `fieldSize` that
    /// disagrees with the row count, and cell values other than 0 or 1
    pub fn to_grid(&self) -> Result<DenseGrid> {
        let height = self.field.len();
        if height != self.field_size {
            return Err(PersistError::InvalidField(format!(
                "fieldSize is {} but field has {} rows",
                self.field_size, height
            )));
        }
        let width = self.field.first().map_or(0, Vec::len);

        let mut grid = DenseGrid::with_boundary(width, height, self.boundary);
        for (y, row) in self.field.iter().enumerate() {
            if row.len() != width {
                return Err(PersistError::InvalidField(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            for (x, &value) in row.iter().enumerate() {
                let cell = match value {
                    0 => Cell::Dead,
                    1 => Cell::Alive,
                    other => {
                        return Err(PersistError::InvalidField(format!(
                            "cell ({}, {}) is {}, expected 0 or 1",
                            x, y, other
                        )));
                    }
                };
                grid.set((x as i64, y as i64), cell.is_alive());
            }
        }
        Ok(grid)
    }

    /// Split into a paused session and its view
    pub fn into_session(self) -> Result<(Session<DenseGrid>, View)> {
        let grid = self.to_grid()?;
        let session = Session::new(grid)
            .with_steps(self.steps)
            .with_step_interval(self.simulation_speed);
        Ok((session, self.view))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let file: Self = serde_json::from_str(text)?;
        file.to_grid()?;
        Ok(file)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("saved session at step {} to {}", self.steps, path.display());
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Load a session, or the defaults when the file is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        or_fallback(path, Self::load(path), Self::default)
    }
}

impl Default for SessionFile {
    fn default() -> Self {
        let size = Self::DEFAULT_FIELD_SIZE;
        Self {
            steps: 0,
            view: View::centered(size, View::DEFAULT_CELL_SIZE, View::DEFAULT_SCREEN_SIZE),
            simulation_speed: Self::DEFAULT_SIMULATION_SPEED,
            field_size: size,
            field: vec![vec![0; size]; size],
            boundary: Boundary::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use std::path::PathBuf;

    const SAVED: &str = r#"{"steps": 7, "cameraPos": [-10.5, 20], "panSpeed": 0.1,
        "simulationSpeed": 0.5, "cellSize": 30, "screenSize": [800, 600],
        "fieldSize": 3, "field": [[0, 1, 0], [0, 1, 0], [0, 1, 0]]}"#;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("life_engine_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_reads_existing_save_shape() {
        let file = SessionFile::from_json(SAVED).unwrap();
        assert_eq!(file.steps, 7);
        assert_eq!(file.view.camera_pos, (-10.5, 20.0));
        assert_eq!(file.view.cell_size, 30);
        assert_eq!(file.view.screen_size, (800, 600));
        assert_eq!(file.boundary, Boundary::Frozen);

        let (session, view) = file.into_session().unwrap();
        assert_eq!(view.pan_speed, 0.1);
        assert_eq!(session.steps, 7);
        assert!((session.step_interval() - 0.5).abs() < 1e-6);
        let live: Vec<_> = session.generation.live_cells().collect();
        assert_eq!(live, vec![(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let without_field = SAVED.replace(r#""field": [[0, 1, 0], [0, 1, 0], [0, 1, 0]]"#, r#""other": 1"#);
        assert!(matches!(SessionFile::from_json(&without_field), Err(PersistError::Json(_))));
    }

    #[test]
    fn test_invalid_fields_are_rejected() {
        let ragged = SAVED.replace("[0, 1, 0]]", "[0, 1]]");
        assert!(matches!(SessionFile::from_json(&ragged), Err(PersistError::InvalidField(_))));

        let bad_value = SAVED.replace("[[0, 1, 0]", "[[0, 2, 0]");
        assert!(matches!(SessionFile::from_json(&bad_value), Err(PersistError::InvalidField(_))));

        let wrong_size = SAVED.replace(r#""fieldSize": 3"#, r#""fieldSize": 4"#);
        assert!(matches!(SessionFile::from_json(&wrong_size), Err(PersistError::InvalidField(_))));
    }

    #[test]
    fn test_session_round_trip() {
        let mut grid = DenseGrid::with_boundary(40, 30, Boundary::Toroidal);
        presets::glider().place_on(&mut grid, (5, 5));
        presets::pulsar().place_on(&mut grid, (20, 10));
        let session = Session::new(grid).with_steps(3).step();
        let view = View::centered(40, 12, (640, 480));

        let file = SessionFile::from_session(&session, &view);
        let parsed = SessionFile::from_json(&file.to_json().unwrap()).unwrap();
        assert_eq!(parsed, file);

        let (restored, restored_view) = parsed.into_session().unwrap();
        assert_eq!(restored.generation, session.generation);
        assert_eq!(restored.steps, 4);
        assert_eq!(restored_view, view);
    }

    #[test]
    fn test_default_is_empty_hundred_square() {
        let file = SessionFile::default();
        let grid = file.to_grid().unwrap();
        assert_eq!(grid.dimensions(), (100, 100));
        assert_eq!(grid.population(), 0);
        assert_eq!(file.view, View::default());
    }

    #[test]
    fn test_save_load_and_fallback() {
        let path = temp_path("session.json");
        let (session, view) = SessionFile::from_json(SAVED).unwrap().into_session().unwrap();
        SessionFile::from_session(&session.step(), &view).save(&path).unwrap();

        // Only the center of a 3x3 frozen field can change
        let loaded = SessionFile::load(&path).unwrap();
        assert_eq!(loaded.steps, 8);
        assert_eq!(loaded.field, vec![vec![0, 1, 0]; 3]);

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(SessionFile::load_or_default(&path), SessionFile::default());
        let _ = fs::remove_file(&path);

        assert_eq!(SessionFile::load_or_default(temp_path("absent.json")), SessionFile::default());
    }
}
