use crate::error::WallError;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

const WIND_LABELS: [&str; 4] = ["East", "South", "West", "North"];

/// Geometry constants of the table. Changing the picture means changing these
/// defaults and recompiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallConfig {
    pub tile_width: f64,
    pub tile_height: f64,
    pub tile_corner_radius: f64,
    /// Rotation of the whole table relative to the page, in degrees.
    pub wall_tilt_degrees: f64,
    /// One set of documents is produced per entry.
    pub wall_column_counts: Vec<usize>,
    /// Tiles per wall that form the base square without overhang.
    pub inner_column_count: usize,
    pub dice_roll_min: usize,
    pub dice_roll_max: usize,
    /// Indexed by wall, East first, counter-clockwise.
    pub wind_labels: [String; 4],
    /// Distance from the inner edge of a wall row to the wind label baseline.
    pub wind_label_inset: f64,
    /// Gap between a start marker tail and its numeral.
    pub start_label_gap: f64,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            tile_width: 28.0,
            tile_height: 37.0,
            tile_corner_radius: 3.0,
            wall_tilt_degrees: 15.0,
            wall_column_counts: vec![17, 18],
            inner_column_count: 13,
            dice_roll_min: 3,
            dice_roll_max: 18,
            wind_labels: WIND_LABELS.map(|label| label.to_string()),
            wind_label_inset: 30.0,
            start_label_gap: 12.0,
        }
    }
}

impl WallConfig {
    /// Side length of the square formed by the non-overhanging tiles.
    pub fn inner_side_length(&self) -> f64 {
        self.inner_column_count as f64 * self.tile_width
    }

    pub fn max_column_count(&self) -> usize {
        self.wall_column_counts
            .iter()
            .copied()
            .max()
            .unwrap_or(self.inner_column_count)
    }

    pub fn tilt_radians(&self) -> f64 {
        self.wall_tilt_degrees.to_radians()
    }

    pub fn dice_rolls(&self) -> RangeInclusive<usize> {
        self.dice_roll_min..=self.dice_roll_max
    }

    pub fn wind_label(&self, wall_index: usize) -> &str {
        &self.wind_labels[wall_index % 4]
    }

    pub fn validate(&self) -> Result<(), WallError> {
        if self.inner_column_count == 0 {
            return Err(WallError::InvalidInnerCount);
        }
        if self.tile_width <= 0.0 || self.tile_height <= 0.0 {
            return Err(WallError::InvalidTileSize {
                width: self.tile_width,
                height: self.tile_height,
            });
        }
        if self.dice_roll_min == 0 || self.dice_roll_min > self.dice_roll_max {
            return Err(WallError::InvalidDiceRange {
                min: self.dice_roll_min,
                max: self.dice_roll_max,
            });
        }
        if self.wall_column_counts.is_empty() {
            return Err(WallError::NoColumnCounts);
        }
        for &column_count in &self.wall_column_counts {
            self.check_column_count(column_count)?;
        }
        Ok(())
    }

    pub fn check_column_count(&self, column_count: usize) -> Result<(), WallError> {
        if column_count < self.inner_column_count {
            return Err(WallError::ColumnCountBelowInner {
                column_count,
                inner: self.inner_column_count,
            });
        }
        Ok(())
    }
}

/// What to draw on top of the four walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub show_wind_labels: bool,
    pub show_starts: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self {
            show_wind_labels: true,
            show_starts: false,
        }
    }

    pub fn with_wind_labels(mut self, show: bool) -> Self {
        self.show_wind_labels = show;
        self
    }

    pub fn with_starts(mut self, show: bool) -> Self {
        self.show_starts = show;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,
    pub wall: WallConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = WallConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.inner_side_length(), 364.0);
        assert_eq!(config.max_column_count(), 18);
        assert_eq!(config.dice_rolls().count(), 16);
    }

    #[test]
    fn rejects_column_count_below_inner() {
        let config = WallConfig {
            wall_column_counts: vec![17, 12],
            ..WallConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(WallError::ColumnCountBelowInner {
                column_count: 12,
                inner: 13
            })
        );
    }

    #[test]
    fn rejects_empty_dice_range() {
        let config = WallConfig {
            dice_roll_min: 12,
            dice_roll_max: 6,
            ..WallConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WallError::InvalidDiceRange { min: 12, max: 6 })
        ));
    }

    #[test]
    fn wind_labels_cycle() {
        let config = WallConfig::default();
        assert_eq!(config.wind_label(0), "East");
        assert_eq!(config.wind_label(3), "North");
        assert_eq!(config.wind_label(5), "South");
    }

    #[test]
    fn options_builder() {
        let options = RenderOptions::new().with_starts(true).with_wind_labels(false);
        assert!(options.show_starts);
        assert!(!options.show_wind_labels);
        assert_eq!(RenderOptions::default(), RenderOptions::new());
    }
}
