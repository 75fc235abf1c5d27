use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{
    error::{LookupError, Stage},
    model::{Coordinates, FlyoverWindow},
};

use super::get_json;

#[derive(Debug, Deserialize)]
struct FlyoverResponse {
    response: Vec<FlyoverWindow>,
}

/// Fetches upcoming passes over `coords`, in the order the service returns them.
#[instrument(skip(http, coords), fields(%coords))]
pub async fn fetch_flyover_times(
    http: &Client,
    base_url: &str,
    coords: Coordinates,
) -> Result<Vec<FlyoverWindow>, LookupError> {
    info!("Retrieving flyover times...");

    let url = format!("{}/json/", base_url.trim_end_matches('/'));
    let request = http.get(url).query(&[
        ("lat", coords.latitude.to_string()),
        ("lon", coords.longitude.to_string()),
    ]);
    let parsed: FlyoverResponse = get_json(Stage::Flyover, request).await?;

    info!("Retrieving flyover times... OK, {} found", parsed.response.len());
    Ok(parsed.response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;

    const COORDS: Coordinates = Coordinates { latitude: 49.2643, longitude: -123.0961 };

    fn coords_query() -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("lat".into(), "49.2643".into()),
            Matcher::UrlEncoded("lon".into(), "-123.0961".into()),
        ])
    }

    #[tokio::test]
    async fn returns_windows_in_upstream_order() -> Result<(), LookupError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/json/")
            .match_query(coords_query())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"message":"success","request":{"passes":3},"response":[
                    {"risetime":1637750000,"duration":300},
                    {"risetime":1637700000,"duration":612},
                    {"risetime":1637800000,"duration":45}]}"#,
            )
            .create_async()
            .await;

        let windows = fetch_flyover_times(&Client::new(), &server.url(), COORDS).await?;

        mock.assert_async().await;
        assert_eq!(
            windows,
            vec![
                FlyoverWindow { risetime: 1_637_750_000, duration: 300 },
                FlyoverWindow { risetime: 1_637_700_000, duration: 612 },
                FlyoverWindow { risetime: 1_637_800_000, duration: 45 },
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn server_error_yields_no_windows() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/json/")
            .match_query(coords_query())
            .with_status(500)
            .with_body("oops")
            .create_async()
            .await;

        let err = fetch_flyover_times(&Client::new(), &server.url(), COORDS).await.unwrap_err();

        assert!(matches!(err, LookupError::Status { stage: Stage::Flyover, .. }));
    }

    #[tokio::test]
    async fn record_without_duration_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/json/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"response":[{"risetime":1637700000}]}"#)
            .create_async()
            .await;

        let err = fetch_flyover_times(&Client::new(), &server.url(), COORDS).await.unwrap_err();

        assert!(matches!(err, LookupError::Decode { stage: Stage::Flyover, .. }));
    }
}
