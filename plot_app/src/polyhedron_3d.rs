//! 3D polyhedron demo
//!
//! Scatters a few random vectors, draws them with their axis guides plus
//! every triangular face they span, and writes the figure twice — once from
//! the default view and once after rotating the camera — to show that the
//! arrows re-project through the camera on each render pass.

use rand::prelude::*;
use vector_plot::prelude::*;

const VECTOR_COUNT: usize = 4;

fn main() -> Result<(), PlotError> {
    vector_plot::foundation::logging::init();

    let mut rng = thread_rng();
    let vectors: Vec<Vec3> = (0..VECTOR_COUNT)
        .map(|_| {
            Vec3::new(
                rng.gen_range(0.5..3.0),
                rng.gen_range(0.5..3.0),
                rng.gen_range(0.5..3.0),
            )
        })
        .collect();

    let mut axes = Axes3::new(Camera::orbit(Vec3::zeros(), -60.0, 30.0, 10.0));
    plot3::plot_vectors_and_polyhedron(&mut axes, &vectors, None);

    log::info!(
        "{} vectors -> {} retained artists",
        vectors.len(),
        axes.shapes().len()
    );

    let viewport = Viewport::new(800.0, 600.0);

    let list = render::render_axes3(&axes, viewport);
    render::svg::write_svg(&list, "polyhedron_3d.svg")?;

    // Rotate the view a quarter turn and render again; every artist picks up
    // the new projection transform.
    *axes.camera_mut() = Camera::orbit(Vec3::zeros(), 30.0, 45.0, 10.0);
    let rotated = render::render_axes3(&axes, viewport);
    render::svg::write_svg(&rotated, "polyhedron_3d_rotated.svg")?;

    Ok(())
}
