use randomly::prelude::*;
use randomly_examples::{init_tracing, render_palette_to_png};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let model = std::env::args().nth(1).unwrap_or_else(|| "default".into());

    let client = PaletteClient::new();
    let palette = client.fetch_named(&model)?;
    info!(%model, "fetched palette");

    render_palette_to_png(&palette, (200, 200), "palette-swatches.png")?;

    Ok(())
}
