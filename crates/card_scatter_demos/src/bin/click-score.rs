use card_scatter::prelude::*;
use card_scatter_demos::init_tracing;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let viewport = Viewport::new(5.0, 16.0 / 9.0);
    let coordinator = SpawnCoordinator::new(
        SpawnConfig::new().with_count_range(10, 30),
        Palette::card_table(),
    );
    let mut kinds = vec![
        SpawnableKind::new("ace", 1).with_max_count(4),
        SpawnableKind::new("face", 3),
        SpawnableKind::new("pip", 6),
    ];

    let mut rng = StdRng::seed_from_u64(7);
    let result = coordinator.run_in_viewport(&mut kinds, Some(&viewport), &mut rng, &mut ());
    if result.aborted {
        anyhow::bail!("session aborted");
    }

    let boundary = coordinator.boundary_calculator().compute(Some(&viewport))?;
    let mut table = CardTable::new();
    table.deal(result.placements);
    let mut score = ScoreTracker::new();
    let mut removals = VecSink::filtered([SpawnEventKind::CardRemoved]);

    // Random clicks across the view until the table is clear or we give up.
    let half = boundary.half_extents() + Vec2::splat(1.0);
    let mut clicks = 0;
    while !table.is_empty() && clicks < 10_000 {
        clicks += 1;
        let point = Vec2::new(
            (rng.random::<f32>() * 2.0 - 1.0) * half.x,
            (rng.random::<f32>() * 2.0 - 1.0) * half.y,
        );
        if let Some(removal) = table.click_with_events(point, &mut score, &mut removals) {
            tracing::debug!("Click {} removed {} -> {}.", clicks, removal.kind_id, removal.total);
        }
    }

    tracing::info!(
        "Score {} after {} clicks; {} cards left, {} removals recorded.",
        score.score(),
        clicks,
        table.len(),
        removals.len()
    );

    Ok(())
}
