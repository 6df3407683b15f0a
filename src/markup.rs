//! Turns a [`TableLayout`] into grouped SVG elements.
//!
//! Everything is built axis aligned around the East wall template; walls and
//! markers are placed by group rotations, and the tilt is one outer group.

use crate::layout::{LabelLayout, StartMarker, TableLayout, WallLayout};
use crate::transform::{Transform, fmt_num, transform_list};
use svg::node::element::{Group, Text, Use};

pub const TILE_ID: &str = "tile";
pub const START_ID: &str = "start-arrow";
pub const ARROWHEAD_ID: &str = "arrowhead";

pub fn wall_fragment(wall: &WallLayout) -> Group {
    let mut group = Group::new()
        .set("class", "wall")
        .set("transform", Transform::Rotate(wall.rotation).to_string());
    for anchor in &wall.tiles {
        group = group.add(
            Use::new()
                .set("href", format!("#{TILE_ID}"))
                .set("x", fmt_num(anchor.x))
                .set("y", fmt_num(anchor.y)),
        );
    }
    if let Some(label) = &wall.wind_label {
        group = group.add(wind_label(label));
    }
    group
}

fn wind_label(label: &LabelLayout) -> Text {
    Text::new(label.text.clone()).set("class", "wind").set(
        "transform",
        transform_list(&[
            Transform::Translate(label.position.x, label.position.y),
            Transform::Rotate(label.rotation),
        ]),
    )
}

pub fn start_fragment(marker: &StartMarker) -> Group {
    let mut steps = vec![
        Transform::Rotate(marker.rotation()),
        Transform::Translate(marker.tail.x, marker.tail.y),
    ];
    if marker.scale != 1.0 {
        steps.push(Transform::Scale(marker.scale));
    }
    let numeral = Text::new(marker.roll.to_string())
        .set("class", "start-number")
        .set(
            "transform",
            transform_list(&[
                Transform::Translate(marker.label_offset.x, marker.label_offset.y),
                Transform::Rotate(-marker.rotation()),
            ]),
        );
    Group::new()
        .set("class", "start")
        .set("transform", transform_list(&steps))
        .add(Use::new().set("href", format!("#{START_ID}")))
        .add(numeral)
}

/// Walls and markers inside the tilted table group.
pub fn table_fragment(layout: &TableLayout) -> Group {
    let mut table = Group::new().set("class", "table");
    for wall in &layout.walls {
        table = table.add(wall_fragment(wall));
    }
    for marker in &layout.starts {
        table = table.add(start_fragment(marker));
    }
    Group::new()
        .set("transform", Transform::Rotate(layout.page_rotation()).to_string())
        .add(table)
}
