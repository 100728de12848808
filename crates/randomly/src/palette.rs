//! Colormind palette fetching.
//!
//! The Colormind API takes `{"model": "<name>"}` over HTTP POST and answers
//! with `{"result": [[r, g, b]; 5]}`. The transport is a trait so the
//! request/parse logic can be exercised without network access; the default
//! implementation is a blocking [ureq] agent.
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Public Colormind endpoint.
pub const COLORMIND_ENDPOINT: &str = "http://colormind.io/api/";

/// One color, one byte per channel.
pub type Rgb = [u8; 3];

/// Palette model supported by the Colormind service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteModel {
    Default,
    Ui,
}

impl PaletteModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteModel::Default => "default",
            PaletteModel::Ui => "ui",
        }
    }
}

impl fmt::Display for PaletteModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default" => Ok(PaletteModel::Default),
            "ui" => Ok(PaletteModel::Ui),
            other => Err(Error::InvalidArgument(format!(
                "palette model '{other}' is not supported"
            ))),
        }
    }
}

/// Five colors as returned by the service, in response order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; 5],
}

impl Palette {
    pub fn colors(&self) -> &[Rgb; 5] {
        &self.colors
    }

    /// One label per swatch, e.g. `[52, 62, 70]`.
    pub fn labels(&self) -> [String; 5] {
        self.colors
            .map(|[r, g, b]| format!("[{r}, {g}, {b}]"))
    }
}

#[derive(Serialize)]
struct PaletteRequest<'a> {
    model: &'a str,
}

#[derive(Deserialize)]
struct PaletteResponse {
    result: Vec<Rgb>,
}

/// Injected "post JSON, get JSON back" capability.
pub trait PaletteTransport {
    fn post_json(&self, url: &str, body: &str) -> Result<String>;
}

/// Blocking transport over a [ureq::Agent].
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteTransport for UreqTransport {
    fn post_json(&self, url: &str, body: &str) -> Result<String> {
        let response = self
            .agent
            .post(url)
            .set("Content-Type", "application/json")
            .send_string(body)?;
        Ok(response.into_string()?)
    }
}

/// Client for fetching palettes from the Colormind service.
///
/// Transport and parse failures propagate to the caller unchanged; there are
/// no retries.
pub struct PaletteClient<T = UreqTransport> {
    transport: T,
    endpoint: String,
}

impl PaletteClient<UreqTransport> {
    /// Client over the real endpoint with the default blocking transport.
    pub fn new() -> Self {
        Self::with_transport(UreqTransport::new())
    }
}

impl Default for PaletteClient<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PaletteTransport> PaletteClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            endpoint: COLORMIND_ENDPOINT.to_owned(),
        }
    }

    /// Override the endpoint (builder-style).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Fetch the five-color palette for `model`.
    pub fn fetch(&self, model: PaletteModel) -> Result<Palette> {
        let body = serde_json::to_string(&PaletteRequest {
            model: model.as_str(),
        })?;

        info!(%model, endpoint = %self.endpoint, "requesting palette");
        let raw = self.transport.post_json(&self.endpoint, &body)?;

        let parsed: PaletteResponse = serde_json::from_str(&raw)?;
        let count = parsed.result.len();
        let colors: [Rgb; 5] = parsed.result.try_into().map_err(|_| {
            Error::MalformedResponse(format!("expected 5 colors, got {count}"))
        })?;

        Ok(Palette { colors })
    }

    /// Parse `model_name` and fetch.
    ///
    /// An unsupported name fails with [`Error::InvalidArgument`] before the
    /// transport is touched.
    pub fn fetch_named(&self, model_name: &str) -> Result<Palette> {
        self.fetch(model_name.parse()?)
    }
}
