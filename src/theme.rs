use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub wind_font_size: f64,
    pub start_font_size: f64,
    pub text_color: String,
    pub tile_fill: String,
    pub tile_border: String,
    pub tile_border_width: f64,
    pub start_color: String,
    pub start_stroke_width: f64,
    pub background: String,
}

impl Theme {
    /// Ivory tiles with a dark brown border, red break markers.
    pub fn classic() -> Self {
        Self {
            font_family: "\"Noto Sans\", \"Helvetica Neue\", Arial, sans-serif".to_string(),
            wind_font_size: 24.0,
            start_font_size: 14.0,
            text_color: "#333333".to_string(),
            tile_fill: "#FAF6E9".to_string(),
            tile_border: "#5A4A32".to_string(),
            tile_border_width: 1.5,
            start_color: "#C0392B".to_string(),
            start_stroke_width: 2.0,
            background: "none".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
