/// wire3d - interactive terminal wireframe viewer
///
/// Renders a cube as a live wireframe with red/green/blue axis rays and
/// a vertex readout table. Controls:
///   - Tab / [ / ]: select the active parameter
///   - Left/Right or -/+: adjust it within its bounds
///   - R: reset the scene
///   - Q/ESC: quit

use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;
use wire3d_core::{Camera, SceneState, Vec4, Wireframe};
use wire3d_terminal::TerminalApp;

#[derive(Parser, Debug)]
#[command(name = "wire3d", about = "Interactive terminal wireframe viewer")]
struct Args {
    /// Initial field of view in degrees (clamped to 15..=180)
    #[arg(long, default_value_t = 90.0)]
    fov: f64,

    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    fps: u64,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let fov = args.fov.clamp(15.0, 180.0);

    // The startup scene: a 2-unit cube pivoted at (0, 0, 4) in front of
    // a camera at the world origin
    let cube = Wireframe::cube(2.0, Vec4::point(0.0, 0.0, 4.0));
    let scene = SceneState::new(cube, Camera::default(), fov);

    let mut app = TerminalApp::new(scene, args.fps)?;
    app.run()?;

    Ok(())
}
