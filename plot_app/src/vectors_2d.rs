//! 2D vector demo
//!
//! Draws a handful of vectors with their coordinate projections, overlays
//! the polygon they span, and writes the figure to `vectors_2d.svg`.

use vector_plot::prelude::*;

fn main() -> Result<(), PlotError> {
    vector_plot::foundation::logging::init();

    let vectors = [
        Vec2::new(3.0, 1.0),
        Vec2::new(1.0, 3.0),
        Vec2::new(-1.5, 2.0),
    ];
    let colors = [
        Color::from_rgb8(214, 39, 40),
        Color::from_rgb8(44, 160, 44),
        Color::from_rgb8(31, 119, 180),
    ];

    let mut axes = Axes2::new();
    plot2::plot_vectors_and_polygon(&mut axes, &vectors, Some(&colors));

    log::info!(
        "x range: {:?}, y range: {:?}",
        axes.x_range(),
        axes.y_range()
    );

    let list = render::render_axes2(&axes, Viewport::new(640.0, 640.0));
    render::svg::write_svg(&list, "vectors_2d.svg")?;

    Ok(())
}
