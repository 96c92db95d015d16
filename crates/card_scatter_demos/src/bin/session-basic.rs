use card_scatter::prelude::*;
use card_scatter_demos::{init_tracing, render_session_to_png, RenderConfig};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Optional path to a RON setup; falls back to the bundled deck.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/assets/deck.ron").to_string());
    let SpawnSetup {
        config,
        mut kinds,
        palette,
    } = SpawnSetup::from_ron_file(&path)?;

    // 16:9 orthographic view, 5 units half height.
    let viewport = Viewport::new(5.0, 16.0 / 9.0);
    let coordinator = SpawnCoordinator::new(config, palette);
    let boundary = coordinator.boundary_calculator().compute(Some(&viewport))?;
    let borders = BorderLayout::around(&boundary, 0.3, 0.6);

    let mut rng = StdRng::seed_from_u64(2025);
    let mut sink = FnSink::new(|event| {
        if let SpawnEvent::Warning { context, message } = event {
            tracing::warn!("[{}] {}", context, message);
        }
    });
    let result = coordinator.run_with_events(&mut kinds, &boundary, &mut rng, &mut sink);

    for kind in &kinds {
        tracing::info!("{:>6}: {} placed", kind.id, kind.current_count);
    }

    let world = Vec2::new(viewport.half_height * 2.0 * viewport.aspect, viewport.half_height * 2.0);
    let rc = RenderConfig::new((1280, 720), world);
    render_session_to_png(&result, &boundary, &borders, &rc, "session-basic.png")?;

    Ok(())
}
