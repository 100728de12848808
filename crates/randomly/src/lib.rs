#![forbid(unsafe_code)]
//! randomly: random-output helpers with explicit, injectable randomness.
//!
//! Modules:
//! - points: homogeneous spatial Poisson point sampling over a rectangle
//! - password: uniform password generation from a filtered ASCII alphabet
//! - palette: Colormind palette fetching behind a swappable transport
//!
//! Every sampling operation takes `&mut dyn RngCore`, so callers own seeding
//! and thread placement of the generator.
pub mod error;
pub mod palette;
pub mod password;
pub mod points;

/// Convenient re-exports for common types. Import with `use randomly::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::palette::{
        Palette, PaletteClient, PaletteModel, PaletteTransport, Rgb, UreqTransport,
        COLORMIND_ENDPOINT,
    };
    pub use crate::password::PasswordGenerator;
    pub use crate::points::{PoissonPointSampling, Region};
}
