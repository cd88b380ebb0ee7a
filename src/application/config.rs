use crate::domain::{BirthTiePolicy, BoardError, Player, presets};
use crate::rendering::Lighting;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// A pattern stamped onto the board at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPlacement {
    pub pattern: String,
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// Board configuration, loadable from JSON. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// World-space offset from one row of instances to the next
    pub row_step: Vec3,
    /// World-space offset from one column of instances to the next
    pub col_step: Vec3,
    /// Model translation of the whole board in world space
    pub translation: Vec3,
    pub tie_policy: BirthTiePolicy,
    /// Boards with at least this many cells step on the rayon pool
    pub parallel_threshold: usize,
    pub random_density: f64,
    pub seeds: Vec<SeedPlacement>,
    pub shader_sets: Vec<String>,
    pub lighting: Lighting,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 16,
            cols: 16,
            row_step: Vec3::new(0.0, 0.0, 2.2),
            col_step: Vec3::new(2.2, 0.0, 0.0),
            translation: Vec3::ZERO,
            tie_policy: BirthTiePolicy::default(),
            parallel_threshold: 256 * 256,
            random_density: 0.3,
            seeds: vec![
                SeedPlacement {
                    pattern: "Glider".into(),
                    row: 1,
                    col: 1,
                    player: Player::One,
                },
                SeedPlacement {
                    pattern: "Blinker".into(),
                    row: 10,
                    col: 10,
                    player: Player::Two,
                },
            ],
            shader_sets: vec!["instanced".into()],
            lighting: Lighting::default(),
        }
    }
}

impl BoardConfig {
    /// Board with the given size and no seeds
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            seeds: Vec::new(),
            ..Self::default()
        }
    }

    /// Read a JSON config file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!(path = %path.display(), rows = config.rows, cols = config.cols, "loaded board config");
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check dimensions, density and that every seed names a known pattern
    /// that fits on the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(0.0..=1.0).contains(&self.random_density) {
            return Err(BoardError::Config(format!(
                "random_density {} is outside [0, 1]",
                self.random_density
            )));
        }

        for seed in &self.seeds {
            let pattern = presets::by_name(&seed.pattern)?;
            let out_of_range = || BoardError::OutOfRange {
                row: seed.row,
                col: seed.col,
                rows: self.rows,
                cols: self.cols,
            };
            let last_row = seed.row.checked_add(pattern.rows - 1).ok_or_else(out_of_range)?;
            let last_col = seed.col.checked_add(pattern.cols - 1).ok_or_else(out_of_range)?;
            if last_row >= self.rows || last_col >= self.cols {
                return Err(out_of_range());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(BoardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = BoardConfig::from_json(r#"{ "rows": 8, "cols": 12, "seeds": [] }"#).unwrap();
        assert_eq!((config.rows, config.cols), (8, 12));
        assert_eq!(config.tie_policy, BirthTiePolicy::Neither);
        assert_eq!(config.col_step, Vec3::new(2.2, 0.0, 0.0));
        assert_eq!(config.translation, Vec3::ZERO);
    }

    #[test]
    fn test_steps_and_seeds_parse() {
        let json = r#"{
            "rows": 6, "cols": 6,
            "row_step": [0.0, 0.0, 1.5],
            "translation": [-3.0, 0.0, 4.0],
            "tie_policy": "PlayerTwo",
            "seeds": [{ "pattern": "block", "row": 4, "col": 4, "player": "Two" }]
        }"#;
        let config = BoardConfig::from_json(json).unwrap();
        assert_eq!(config.row_step, Vec3::new(0.0, 0.0, 1.5));
        assert_eq!(config.translation, Vec3::new(-3.0, 0.0, 4.0));
        assert_eq!(config.tie_policy, BirthTiePolicy::PlayerTwo);
        assert_eq!(config.seeds[0].player, Player::Two);
    }

    #[test]
    fn test_bundled_config_is_valid() {
        let config = BoardConfig::from_json(include_str!("../../configs/board.json")).unwrap();
        assert_eq!(config.seeds.len(), 3);
        assert_eq!(config.shader_sets, vec!["instanced", "flat"]);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            BoardConfig::empty(0, 4).validate(),
            Err(BoardError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_seed_off_board_rejected() {
        let mut config = BoardConfig::empty(4, 4);
        config.seeds.push(SeedPlacement {
            pattern: "Block".into(),
            row: 3,
            col: 0,
            player: Player::One,
        });
        assert!(matches!(config.validate(), Err(BoardError::OutOfRange { .. })));

        config.seeds[0].pattern = "Unknown".into();
        assert!(matches!(config.validate(), Err(BoardError::UnknownPattern(_))));
    }

    #[test]
    fn test_seed_at_usize_max_rejected() {
        let json = r#"{
            "rows": 4, "cols": 4,
            "seeds": [{ "pattern": "Block", "row": 18446744073709551615, "col": 0, "player": "One" }]
        }"#;
        assert!(matches!(
            BoardConfig::from_json(json),
            Err(BoardError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_bad_density_rejected() {
        let mut config = BoardConfig::empty(4, 4);
        config.random_density = 1.5;
        assert!(matches!(config.validate(), Err(BoardError::Config(_))));
    }
}
