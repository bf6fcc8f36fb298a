//! SVG format writing operations for choropleth panels.

mod color;
mod geometry;
mod writer;

pub(crate) use color::*;
pub(crate) use geometry::*;
pub(crate) use writer::*;
