use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{
    error::{LookupError, Stage},
    model::{Address, Coordinates},
};

use super::get_json;

#[derive(Debug, Deserialize)]
struct GeoResponse {
    latitude: f64,
    longitude: f64,
    city: Option<String>,
    country_name: Option<String>,
}

/// Resolves `address` to coordinates via `<base_url>/json/<address>?apikey=<api_key>`.
#[instrument(skip(http, api_key, address), fields(%address))]
pub async fn fetch_coords_by_ip(
    http: &Client,
    base_url: &str,
    api_key: &str,
    address: &Address,
) -> Result<Coordinates, LookupError> {
    if address.is_blank() {
        return Err(LookupError::MissingField { stage: Stage::Geolocation, field: "address" });
    }

    info!("Retrieving coordinates...");

    let url = format!("{}/json/{}", base_url.trim_end_matches('/'), address);
    let parsed: GeoResponse =
        get_json(Stage::Geolocation, http.get(url).query(&[("apikey", api_key)])).await?;

    let coordinates = Coordinates { latitude: parsed.latitude, longitude: parsed.longitude };
    info!(
        %coordinates,
        city = parsed.city.as_deref().unwrap_or("unknown"),
        country = parsed.country_name.as_deref().unwrap_or("unknown"),
        "Retrieving coordinates... OK"
    );

    Ok(coordinates)
}
