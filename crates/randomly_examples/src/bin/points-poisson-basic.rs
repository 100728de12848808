use rand::rngs::StdRng;
use rand::SeedableRng;
use randomly::prelude::*;
use randomly_examples::{init_tracing, render_points_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // 100x100 region at 0.1 events per unit area: ~1000 points expected.
    let region = Region::new(0.0, 0.0, 100.0, 100.0)?;
    let sampler = PoissonPointSampling::new(0.1)?;

    let mut rng = StdRng::seed_from_u64(2025);
    let points = sampler.sample(region, &mut rng);
    info!(
        count = points.len(),
        expected = sampler.intensity() * region.area(),
        "sampled poisson points"
    );

    let config = RenderConfig::new((1000, 1000));
    render_points_to_png(&points, region, &config, "points-poisson-basic.png")?;

    Ok(())
}
