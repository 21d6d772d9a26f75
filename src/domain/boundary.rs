use serde::{Deserialize, Serialize};

/// What happens at the edge of a dense grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// The outermost ring is never evaluated and keeps whatever state it
    /// was given. Neighbor look-ups never leave the grid.
    #[default]
    Frozen,
    /// Edges wrap like a torus and every cell is evaluated.
    Toroidal,
}

impl Boundary {
    pub fn name(&self) -> &'static str {
        match self {
            Boundary::Frozen => "Frozen",
            Boundary::Toroidal => "Toroidal",
        }
    }

    /// Map a possibly out-of-range coordinate onto a `width` x `height`
    /// grid, or `None` when the policy has no cell there.
    pub fn resolve(&self, x: i64, y: i64, width: usize, height: usize) -> Option<(usize, usize)> {
        if width == 0 || height == 0 {
            return None;
        }
        let (w, h) = (width as i64, height as i64);
        match self {
            Boundary::Frozen => {
                ((0..w).contains(&x) && (0..h).contains(&y)).then_some((x as usize, y as usize))
            }
            Boundary::Toroidal => Some((x.rem_euclid(w) as usize, y.rem_euclid(h) as usize)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_frozen() {
        assert_eq!(Boundary::default(), Boundary::Frozen);
    }

    #[test]
    fn test_frozen_rejects_outside() {
        assert_eq!(Boundary::Frozen.resolve(-1, 0, 5, 5), None);
        assert_eq!(Boundary::Frozen.resolve(5, 0, 5, 5), None);
        assert_eq!(Boundary::Frozen.resolve(4, 4, 5, 5), Some((4, 4)));
    }

    #[test]
    fn test_toroidal_wraps() {
        assert_eq!(Boundary::Toroidal.resolve(-1, 0, 5, 5), Some((4, 0)));
        assert_eq!(Boundary::Toroidal.resolve(5, -1, 5, 5), Some((0, 4)));
    }

    #[test]
    fn test_empty_grid_has_no_cells() {
        assert_eq!(Boundary::Toroidal.resolve(0, 0, 0, 3), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Boundary::Toroidal).unwrap(), "\"toroidal\"");
        let parsed: Boundary = serde_json::from_str("\"frozen\"").unwrap();
        assert_eq!(parsed, Boundary::Frozen);
    }
}
