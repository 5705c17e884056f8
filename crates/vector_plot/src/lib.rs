//! # Vector Plot
//!
//! A small toolkit for plotting 2D and 3D vectors, their coordinate
//! projections, and the polygons/polyhedra they span.
//!
//! ## Features
//!
//! - **Retained surfaces**: `Axes2`/`Axes3` own axis ranges and the drawn
//!   primitives; ranges only ever widen as vectors are added
//! - **Live 3D projection**: arrows hold raw scene coordinates and re-project
//!   through the camera on every render pass, so the view can be rotated
//!   between frames
//! - **Polygon/polyhedron overlays**: the span of a vector set as a filled
//!   patch (2D) or every 3-combination as translucent faces (3D)
//! - **SVG export**: render passes produce a flat display list written out
//!   with the `svg` crate
//! - **Configurable styling**: arrow heads, guide alphas, and face colors in
//!   a TOML/RON-loadable `PlotStyle`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vector_plot::prelude::*;
//!
//! fn main() -> Result<(), PlotError> {
//!     let mut axes = Axes2::new();
//!     plot2::plot_vector(&mut axes, Vec2::new(3.0, 4.0), &VectorOptions::default());
//!
//!     let list = render::render_axes2(&axes, Viewport::new(640.0, 480.0));
//!     render::svg::write_svg(&list, "vector.svg")?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod artist;
pub mod camera;
pub mod config;
pub mod foundation;
pub mod plot2;
pub mod plot3;
pub mod render;
pub mod style;
pub mod surface;

mod error;

pub use error::PlotError;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        artist::{Arrow3, Artist, Projected},
        camera::Camera,
        config::{Config, ConfigError, PlotStyle},
        foundation::math::{Vec2, Vec3},
        plot2::{self, VectorOptions},
        plot3,
        render::{self, DisplayList, Viewport},
        style::{Color, LineStyle, Stroke},
        surface::{Axes2, Axes3, ShapeId},
        PlotError,
    };
}
