//! Projection and path building for SVG map panels.

use std::io::Write;

use anyhow::Result;
use geo::{Coord, CoordsIter, LineString, MultiPolygon, Rect};

use crate::types::Center;

/// Equirectangular viewport centered on a lon/lat point.
/// At zoom `z` the panel width spans `360 / 2^z` degrees of longitude.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Viewport {
    center: Center,
    scale: f64, // pixels per degree
    width: f64,
    height: f64,
}

impl Viewport {
    pub(crate) fn new(center: Center, zoom: f64, width: u32, height: u32) -> Self {
        let width = width as f64;
        let span = 360.0 / 2f64.powf(zoom);
        Self { center, scale: width / span, width, height: height as f64 }
    }

    /// Map lon/lat -> SVG coords (Y down).
    #[inline]
    pub(crate) fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        let x = self.width / 2.0 + (coord.x - self.center.longitude) * self.scale;
        let y = self.height / 2.0 - (coord.y - self.center.latitude) * self.scale;
        (x, y)
    }

    /// Visible lon/lat window.
    pub(crate) fn window(&self) -> Rect<f64> {
        let half_lon = self.width / 2.0 / self.scale;
        let half_lat = self.height / 2.0 / self.scale;
        Rect::new(
            Coord { x: self.center.longitude - half_lon, y: self.center.latitude - half_lat },
            Coord { x: self.center.longitude + half_lon, y: self.center.latitude + half_lat },
        )
    }
}

/// Draw one area as a path with a hover tooltip.
pub(crate) fn draw_area(writer: &mut impl Write, shape: &MultiPolygon<f64>, title: &str, viewport: &Viewport) -> Result<()> {
    writeln!(writer, r#"<path class="area" d="{}"><title>{}</title></path>"#,
        multipolygon_to_path(shape, viewport),
        escape_xml(title),
    )?;
    Ok(())
}

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
fn multipolygon_to_path(shape: &MultiPolygon<f64>, viewport: &Viewport) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        out.push_str(&ring_to_path(polygon.exterior(), viewport));
        for interior in polygon.interiors() {
            out.push_str(&ring_to_path(interior, viewport));
        }
    }

    out.trim_start().to_string()
}

/// Build a compact SVG path string for a LineString (ring).
fn ring_to_path(ring: &LineString<f64>, viewport: &Viewport) -> String {
    let mut out = String::new();

    let mut coords = ring.coords_iter()
        .map(|coord| viewport.project(&coord));
    if let Some((x, y)) = coords.next() {
        out.push_str(&format!(" M{x:.3},{y:.3}"));
        for (x, y) in coords {
            out.push_str(&format!(" L{x:.3},{y:.3}"));
        }
        out.push('Z');
    }

    out
}

/// Escape text for use in XML content and attribute values.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
