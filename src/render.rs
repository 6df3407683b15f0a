use crate::config::{Config, RenderOptions, WallConfig};
use crate::error::WallError;
use crate::layout::{TableLayout, compute_layout};
use crate::layout_dump::write_layout_dump;
use crate::log::debug;
use crate::markup::{ARROWHEAD_ID, START_ID, TILE_ID, table_fragment};
use crate::theme::Theme;
use crate::transform::fmt_num;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use svg::Document;
use svg::node::element::{Definitions, Marker, Path as SvgPath, Rectangle, Style};

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

// Start arrow: up towards the wall, then along it. Shares of a tile.
const START_ARROW_RISE: f64 = 0.7;
const START_ARROW_RUN: f64 = 0.6;

pub fn render_svg(layout: &TableLayout, theme: &Theme, config: &WallConfig) -> String {
    let doc = build_document(layout, theme, config);
    format!("{XML_DECLARATION}\n{doc}\n")
}

/// Lays out and renders one document.
pub fn render_table(
    config: &Config,
    column_count: usize,
    options: RenderOptions,
) -> Result<String, WallError> {
    let layout = compute_layout(&config.wall, column_count, options)?;
    Ok(render_svg(&layout, &config.theme, &config.wall))
}

pub fn build_document(layout: &TableLayout, theme: &Theme, config: &WallConfig) -> Document {
    let view = layout.view;
    let mut doc = Document::new()
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                fmt_num(view.min_x()),
                fmt_num(view.min_y()),
                fmt_num(view.width()),
                fmt_num(view.height())
            ),
        )
        .add(definitions(config))
        .add(Style::new(style_rules(theme)));

    if theme.background != "none" {
        doc = doc.add(
            Rectangle::new()
                .set("x", fmt_num(view.min_x()))
                .set("y", fmt_num(view.min_y()))
                .set("width", fmt_num(view.width()))
                .set("height", fmt_num(view.height()))
                .set("fill", theme.background.clone()),
        );
    }

    doc.add(table_fragment(layout))
}

fn definitions(config: &WallConfig) -> Definitions {
    let arrowhead = Marker::new()
        .set("id", ARROWHEAD_ID)
        .set("viewBox", "0 0 10 10")
        .set("refX", 10)
        .set("refY", 5)
        .set("markerWidth", 5)
        .set("markerHeight", 5)
        .set("orient", "auto-start-reverse")
        .add(
            SvgPath::new()
                .set("class", "arrowhead")
                .set("d", "M 0 0 L 10 5 L 0 10 z"),
        );

    let tile = Rectangle::new()
        .set("id", TILE_ID)
        .set("class", "tile")
        .set("width", fmt_num(config.tile_width))
        .set("height", fmt_num(config.tile_height))
        .set("rx", fmt_num(config.tile_corner_radius))
        .set("ry", fmt_num(config.tile_corner_radius));

    let start = SvgPath::new()
        .set("id", START_ID)
        .set("class", "start-arrow")
        .set(
            "d",
            format!(
                "M 0 0 V {} H {}",
                fmt_num(-START_ARROW_RISE * config.tile_height),
                fmt_num(-START_ARROW_RUN * config.tile_width)
            ),
        )
        .set("marker-end", format!("url(#{ARROWHEAD_ID})"));

    Definitions::new().add(arrowhead).add(tile).add(start)
}

fn style_rules(theme: &Theme) -> String {
    format!(
        ".tile {{ fill: {tile_fill}; stroke: {tile_border}; stroke-width: {tile_width}; }}
.start-arrow {{ fill: none; stroke: {start}; stroke-width: {start_width}; }}
.arrowhead {{ fill: {start}; }}
.wind {{ font-family: {font}; font-size: {wind_size}px; fill: {text}; text-anchor: middle; dominant-baseline: central; }}
.start-number {{ font-family: {font}; font-size: {start_size}px; fill: {start}; text-anchor: middle; dominant-baseline: hanging; }}",
        tile_fill = theme.tile_fill,
        tile_border = theme.tile_border,
        tile_width = fmt_num(theme.tile_border_width),
        start = theme.start_color,
        start_width = fmt_num(theme.start_stroke_width),
        font = theme.font_family,
        wind_size = fmt_num(theme.wind_font_size),
        start_size = fmt_num(theme.start_font_size),
        text = theme.text_color,
    )
}

pub fn output_file_name(column_count: usize, show_starts: bool) -> String {
    format!(
        "mahjong-wall-{}-columns{}.svg",
        column_count,
        if show_starts { "-with-start" } else { "" }
    )
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

/// Writes every column count with and without start markers into `out_dir`.
/// Returns the written SVG paths in generation order.
pub fn emit_all(config: &Config, out_dir: &Path, dump_layout: bool) -> Result<Vec<PathBuf>> {
    config.wall.validate()?;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut written = Vec::new();
    for &column_count in &config.wall.wall_column_counts {
        for show_starts in [true, false] {
            let options = RenderOptions::new().with_starts(show_starts);
            let layout = compute_layout(&config.wall, column_count, options)?;
            let svg = render_svg(&layout, &config.theme, &config.wall);
            let path = out_dir.join(output_file_name(column_count, show_starts));
            write_output_svg(&svg, Some(&path))?;
            debug!("wrote {}", path.display());
            if dump_layout {
                write_layout_dump(&path.with_extension("json"), &layout)?;
            }
            written.push(path);
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_svg_basic() {
        let config = Config::default();
        let svg = render_table(&config, 17, RenderOptions::new()).unwrap();
        assert!(svg.starts_with(XML_DECLARATION));
        assert!(svg.ends_with("</svg>\n"));

        let doc = roxmltree::Document::parse(&svg).unwrap();
        let root = doc.root_element();
        assert_eq!(root.tag_name().name(), "svg");
        assert_eq!(root.attribute("viewBox"), Some("-440 -440 880 880"));

        let tile = doc
            .descendants()
            .find(|n| n.attribute("id") == Some(TILE_ID))
            .unwrap();
        assert_eq!(tile.tag_name().name(), "rect");
        assert_eq!(tile.attribute("width"), Some("28"));
        assert_eq!(tile.attribute("height"), Some("37"));

        let winds: Vec<_> = doc
            .descendants()
            .filter(|n| n.attribute("class") == Some("wind"))
            .filter_map(|n| n.text().map(str::trim))
            .collect();
        assert_eq!(winds, ["East", "South", "West", "North"]);
        assert!(
            !doc.descendants()
                .any(|n| n.attribute("class") == Some("start-number"))
        );
    }

    #[test]
    fn starts_are_drawn_when_requested() {
        let config = Config::default();
        let svg = render_table(&config, 18, RenderOptions::new().with_starts(true)).unwrap();
        assert_eq!(svg.matches("class=\"start-number\"").count(), 16);
        assert_eq!(svg.matches("href=\"#start-arrow\"").count(), 16);
        assert_eq!(svg.matches("href=\"#tile\"").count(), 4 * 18);
    }

    #[test]
    fn output_names() {
        assert_eq!(output_file_name(17, false), "mahjong-wall-17-columns.svg");
        assert_eq!(output_file_name(18, true), "mahjong-wall-18-columns-with-start.svg");
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = Config::default();
        let options = RenderOptions::new().with_starts(true);
        let first = render_table(&config, 17, options).unwrap();
        let second = render_table(&config, 17, options).unwrap();
        assert_eq!(first, second);
    }
}
