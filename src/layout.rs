use crate::config::{RenderOptions, WallConfig};
use crate::error::WallError;
use crate::log::{debug, warn};
use glam::{DVec2, dvec2};

pub const WALL_COUNT: usize = 4;

/// Scale applied to start markers that would otherwise crowd the tile row.
/// Tuned by eye for 17 and 18 column walls.
pub const START_SHRINK: f64 = 0.9;

/// Rolls from here on print as two digits.
pub const TWO_DIGIT_ROLL: usize = 10;

/// Column counts the shrink cases were tuned against.
pub const TUNED_COLUMN_COUNTS: [usize; 2] = [17, 18];

/// Square viewport centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub half_width: f64,
}

impl ViewBox {
    pub fn min_x(&self) -> f64 {
        -self.half_width
    }

    pub fn min_y(&self) -> f64 {
        -self.half_width
    }

    pub fn width(&self) -> f64 {
        2.0 * self.half_width
    }

    pub fn height(&self) -> f64 {
        2.0 * self.half_width
    }

    pub fn contains(&self, point: DVec2) -> bool {
        point.x.abs() <= self.half_width && point.y.abs() <= self.half_width
    }
}

#[derive(Debug, Clone)]
pub struct LabelLayout {
    pub text: String,
    /// Position in the wall's own (East) frame.
    pub position: DVec2,
    /// Rotation that undoes the wall rotation so the text reads upright.
    pub rotation: f64,
}

#[derive(Debug, Clone)]
pub struct WallLayout {
    pub index: usize,
    /// Rotation of the East template onto this wall, in SVG degrees.
    pub rotation: f64,
    /// Tile origins in the East frame, column 0 first.
    pub tiles: Vec<DVec2>,
    pub wind_label: Option<LabelLayout>,
}

impl WallLayout {
    /// Tile origins after the wall rotation, in the untilted table frame.
    pub fn table_anchors(&self) -> Vec<DVec2> {
        self.tiles
            .iter()
            .map(|&anchor| rotate_point(anchor, self.rotation))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct StartMarker {
    pub roll: usize,
    pub wall_index: usize,
    pub slit_index: usize,
    /// Tail of the arrow in the East frame of `wall_index`.
    pub tail: DVec2,
    /// Numeral position relative to the tail.
    pub label_offset: DVec2,
    pub scale: f64,
}

impl StartMarker {
    pub fn rotation(&self) -> f64 {
        wall_rotation(self.wall_index)
    }

    pub fn table_tail(&self) -> DVec2 {
        rotate_point(self.tail, self.rotation())
    }

    /// Where the numeral lands in the untilted table frame, scale included.
    pub fn table_label(&self) -> DVec2 {
        rotate_point(self.tail + self.label_offset * self.scale, self.rotation())
    }
}

#[derive(Debug, Clone)]
pub struct TableLayout {
    pub column_count: usize,
    pub options: RenderOptions,
    pub tilt_degrees: f64,
    pub view: ViewBox,
    pub walls: Vec<WallLayout>,
    pub starts: Vec<StartMarker>,
}

impl TableLayout {
    /// Rotation applied to the whole table so it sits tilted on the page.
    pub fn page_rotation(&self) -> f64 {
        -self.tilt_degrees
    }

    /// Tile origins as they land on the page, after wall rotation and tilt.
    pub fn page_anchors(&self) -> Vec<DVec2> {
        let tilt = self.page_rotation();
        self.walls
            .iter()
            .flat_map(|wall| wall.table_anchors())
            .map(|anchor| rotate_point(anchor, tilt))
            .collect()
    }

    /// Start arrow tails and numerals as they land on the page.
    pub fn page_start_points(&self) -> Vec<DVec2> {
        let tilt = self.page_rotation();
        self.starts
            .iter()
            .flat_map(|marker| [marker.table_tail(), marker.table_label()])
            .map(|point| rotate_point(point, tilt))
            .collect()
    }
}

pub fn compute_layout(
    config: &WallConfig,
    column_count: usize,
    options: RenderOptions,
) -> Result<TableLayout, WallError> {
    config.validate()?;
    config.check_column_count(column_count)?;

    let view = view_bounds(config);
    debug!(
        "layout for {} columns, view half width {}",
        column_count, view.half_width
    );

    let east_tiles = east_wall_anchors(config, column_count);
    let walls = (0..WALL_COUNT)
        .map(|index| {
            let rotation = wall_rotation(index);
            let wind_label = options.show_wind_labels.then(|| LabelLayout {
                text: config.wind_label(index).to_string(),
                position: dvec2(0.0, config.inner_side_length() / 2.0 - config.wind_label_inset),
                rotation: -rotation,
            });
            WallLayout {
                index,
                rotation,
                tiles: east_tiles.clone(),
                wind_label,
            }
        })
        .collect();

    let starts = if options.show_starts {
        config
            .dice_rolls()
            .map(|roll| start_marker(config, column_count, roll))
            .collect()
    } else {
        Vec::new()
    };

    Ok(TableLayout {
        column_count,
        options,
        tilt_degrees: config.wall_tilt_degrees,
        view,
        walls,
        starts,
    })
}

/// Sized for the widest configured wall so every document shares one frame.
pub fn view_bounds(config: &WallConfig) -> ViewBox {
    let inner_half = config.inner_side_length() / 2.0;
    let along = config.max_column_count() as f64 * config.tile_width - inner_half;
    let outward = inner_half + 2.0 * config.tile_height + 2.0 * config.start_label_gap;
    let reach = along.max(outward) + config.tile_height;
    let tilt = config.tilt_radians().abs();
    ViewBox {
        half_width: (reach * (tilt.cos() + tilt.sin())).ceil(),
    }
}

/// Tile origins of the canonical East wall. Column 0 ends flush with the
/// inner square corner; later columns run left and overhang.
pub fn east_wall_anchors(config: &WallConfig, column_count: usize) -> Vec<DVec2> {
    (0..column_count)
        .map(|column| column_origin(config, column))
        .collect()
}

pub fn column_origin(config: &WallConfig, column: usize) -> DVec2 {
    let inner_half = config.inner_side_length() / 2.0;
    dvec2(
        inner_half - config.tile_width - column as f64 * config.tile_width,
        inner_half,
    )
}

/// Walls go counter-clockwise on the page: East at the bottom, then South on
/// the right, West on top, North on the left.
pub fn wall_rotation(wall_index: usize) -> f64 {
    -90.0 * (wall_index % WALL_COUNT) as f64
}

/// Rotates like SVG `rotate(degrees)` does (y axis pointing down).
pub fn rotate_point(point: DVec2, degrees: f64) -> DVec2 {
    DVec2::from_angle(degrees.to_radians()).rotate(point)
}

/// Wall and slit where the break starts for a roll.
///
/// Counting starts at East and wraps back one wall each time the roll passes a
/// full wall length. A raw wall of -1 is the same quarter turn as 3.
pub fn start_wall_and_slit(roll: usize, column_count: usize) -> (usize, usize) {
    let raw = ((roll as i64 - 1) % 4) - (roll / column_count) as i64;
    let wall_index = raw.rem_euclid(WALL_COUNT as i64) as usize;
    let slit_index = roll % column_count;
    (wall_index, slit_index)
}

pub fn start_marker(config: &WallConfig, column_count: usize, roll: usize) -> StartMarker {
    let (wall_index, slit_index) = start_wall_and_slit(roll, column_count);
    // Centred on the slit column, one tile height out from the row's outer edge.
    let column = column_origin(config, slit_index);
    let tail = dvec2(
        column.x + config.tile_width / 2.0,
        column.y + config.tile_height + config.tile_height,
    );
    let scale = start_scale(wall_index, slit_index, roll);
    if scale != 1.0 && !TUNED_COLUMN_COUNTS.contains(&column_count) {
        warn!(
            "start marker {} shrunk on an untuned {} column wall",
            roll, column_count
        );
    }
    StartMarker {
        roll,
        wall_index,
        slit_index,
        tail,
        label_offset: dvec2(0.0, config.start_label_gap),
        scale,
    }
}

fn start_scale(wall_index: usize, slit_index: usize, roll: usize) -> f64 {
    // Two digit numerals on the side walls run into the tilted row next door.
    if roll >= TWO_DIGIT_ROLL && (wall_index == 1 || wall_index == 3) {
        return START_SHRINK;
    }
    // Corner slits sit under the overhang of the neighbouring wall. With the
    // tuned walls this is roll 17 on 17 columns and roll 18 on 18 columns.
    if slit_index == 0 {
        return START_SHRINK;
    }
    1.0
}
