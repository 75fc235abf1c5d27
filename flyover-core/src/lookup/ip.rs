use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{
    error::{LookupError, Stage},
    model::Address,
};

use super::get_json;

#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// Asks the IP service at `url` for the caller's public address.
#[instrument(skip(http))]
pub async fn fetch_my_ip(http: &Client, url: &str) -> Result<Address, LookupError> {
    info!("Retrieving public IP...");

    let parsed: IpResponse = get_json(Stage::Ip, http.get(url)).await?;
    let address = Address::new(parsed.ip);
    if address.is_blank() {
        return Err(LookupError::MissingField { stage: Stage::Ip, field: "ip" });
    }

    info!(%address, "Retrieving public IP... OK");
    Ok(address)
}
