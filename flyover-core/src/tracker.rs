use chrono::TimeZone;
use reqwest::Client;
use std::fmt::Display;
use tracing::{info, instrument};

use crate::{
    config::Config,
    error::LookupError,
    lookup,
    model::{Address, Coordinates, FlyoverWindow},
};

/// Chains the IP, geolocation and flyover lookups against the services named in [`Config`].
///
/// Lookups run one after another on a shared HTTP client; the first failure ends the chain.
#[derive(Debug, Clone)]
pub struct PassTracker {
    config: Config,
    http: Client,
}

impl PassTracker {
    pub fn new(config: Config) -> Result<Self, LookupError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(LookupError::Client)?;

        Ok(Self { config, http })
    }

    pub async fn fetch_my_ip(&self) -> Result<Address, LookupError> {
        lookup::fetch_my_ip(&self.http, &self.config.ip_url).await
    }

    pub async fn fetch_coords_by_ip(&self, address: &Address) -> Result<Coordinates, LookupError> {
        lookup::fetch_coords_by_ip(
            &self.http,
            &self.config.geo_url,
            &self.config.geo_api_key,
            address,
        )
        .await
    }

    pub async fn fetch_flyover_times(
        &self,
        coords: Coordinates,
    ) -> Result<Vec<FlyoverWindow>, LookupError> {
        lookup::fetch_flyover_times(&self.http, &self.config.flyover_url, coords).await
    }

    /// Upcoming passes over the caller's current location.
    #[instrument(skip(self))]
    pub async fn next_passes_for_my_location(&self) -> Result<Vec<FlyoverWindow>, LookupError> {
        let address = self.fetch_my_ip().await?;
        let coords = self.fetch_coords_by_ip(&address).await?;
        let passes = self.fetch_flyover_times(coords).await?;

        info!("{} upcoming passes over {coords}", passes.len());
        Ok(passes)
    }

    /// Same as [`Self::next_passes_for_my_location`], rendered with [`render_passes`].
    pub async fn next_passes_report<Tz>(&self, tz: &Tz) -> Result<String, LookupError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let passes = self.next_passes_for_my_location().await?;
        render_passes(&passes, tz)
    }
}

/// One newline-terminated line per window, in the given order.
pub fn render_passes<Tz>(passes: &[FlyoverWindow], tz: &Tz) -> Result<String, LookupError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    passes.iter().try_fold(String::new(), |mut out, window| {
        out.push_str(&window.describe(tz)?);
        out.push('\n');
        Ok(out)
    })
}
