use crate::layout::TableLayout;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub column_count: usize,
    pub show_wind_labels: bool,
    pub show_starts: bool,
    pub tilt_degrees: f64,
    pub view_box: [f64; 4],
    pub walls: Vec<WallDump>,
    pub starts: Vec<StartDump>,
}

#[derive(Debug, Serialize)]
pub struct WallDump {
    pub index: usize,
    pub rotation: f64,
    pub anchors: Vec<[f64; 2]>,
    pub wind_label: Option<String>,
    pub wind_label_position: Option<[f64; 2]>,
}

#[derive(Debug, Serialize)]
pub struct StartDump {
    pub roll: usize,
    pub wall_index: usize,
    pub slit_index: usize,
    pub tail: [f64; 2],
    pub scale: f64,
}

impl LayoutDump {
    /// Positions are in the untilted table frame.
    pub fn from_layout(layout: &TableLayout) -> Self {
        let walls = layout
            .walls
            .iter()
            .map(|wall| WallDump {
                index: wall.index,
                rotation: wall.rotation,
                anchors: wall
                    .table_anchors()
                    .iter()
                    .map(|p| [p.x, p.y])
                    .collect(),
                wind_label: wall.wind_label.as_ref().map(|label| label.text.clone()),
                wind_label_position: wall.wind_label.as_ref().map(|label| {
                    let p = crate::layout::rotate_point(label.position, wall.rotation);
                    [p.x, p.y]
                }),
            })
            .collect();

        let starts = layout
            .starts
            .iter()
            .map(|marker| {
                let tail = marker.table_tail();
                StartDump {
                    roll: marker.roll,
                    wall_index: marker.wall_index,
                    slit_index: marker.slit_index,
                    tail: [tail.x, tail.y],
                    scale: marker.scale,
                }
            })
            .collect();

        let view = layout.view;
        LayoutDump {
            column_count: layout.column_count,
            show_wind_labels: layout.options.show_wind_labels,
            show_starts: layout.options.show_starts,
            tilt_degrees: layout.tilt_degrees,
            view_box: [view.min_x(), view.min_y(), view.width(), view.height()],
            walls,
            starts,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &TableLayout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
