use rand::rngs::{StdRng, SysRng};
use rand::SeedableRng;
use randomly::prelude::*;
use randomly_examples::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut rng = StdRng::try_from_rng(&mut SysRng).expect("unexpected failure from SysRng");

    let plain = PasswordGenerator::new(12).generate(&mut rng)?;
    info!(password = %plain, "alphanumeric");

    // Punctuation enabled, visually ambiguous characters removed.
    let strict = PasswordGenerator::new(20)
        .with_punctuation(true)
        .exclude(['l', '1', 'O', '0', 'I', '|'])
        .generate(&mut rng)?;
    info!(password = %strict, "punctuation, no ambiguous characters");

    Ok(())
}
