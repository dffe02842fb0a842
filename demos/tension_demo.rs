//! Tension demo.
//!
//! Bends a grid over a few frames and prints per-frame tension statistics,
//! showing that only the deformed pose is recomputed during playback.
//!
//! Run with `RUST_LOG=debug cargo run --example tension_demo` to see cache activity.

use tension_map::*;

fn bend(rest: &SurfaceMesh, amount: f32) -> SurfaceMesh {
    rest.deformed(|v| {
        // Stretch the far half along X, squash the near half.
        let scale = if v.x > 2.0 { 1.0 + amount } else { 1.0 - amount * 0.5 };
        Vec3::new(v.x * scale, (v.x * amount).sin(), v.z)
    })
}

fn main() -> Result<()> {
    init();

    let rest = shapes::grid("rest", 8, 4, 0.5);
    let mut node = TensionNode::new();

    for frame in 0..5 {
        let amount = frame as f32 * 0.1;
        let mut posed = bend(&rest, amount);
        posed.create_color_set(DEFAULT_COLOR_SET);

        if frame > 0 {
            node.on_input_changed(InputSlot::Deformed);
        }
        let output = node.compute(&rest, &posed);
        let assignment = output.status?;

        let colors = output
            .mesh
            .color_set(DEFAULT_COLOR_SET)
            .map(ColorSet::colors)
            .unwrap_or_else(|| output.mesh.vertex_colors());
        let stretched = colors.iter().filter(|c| c.y > 0.1).count();
        let compressed = colors.iter().filter(|c| c.x > 0.1).count();

        println!(
            "frame {frame}: {assignment:?}, {stretched} stretched, {compressed} compressed"
        );
    }

    let stats = node.stats();
    println!(
        "orig computed {} times, deformed computed {} times",
        stats.orig_computations, stats.deformed_computations
    );

    // Gradient edits do not invalidate cached lengths.
    node.edit_gradient(|g| g.add_point(ControlPoint::new(0.5, Vec3::ONE, Interpolation::Smooth)))?;
    let _ = node.compute(&rest, &bend(&rest, 0.4));
    println!("after gradient edit: {:?}", node.stats());

    Ok(())
}
