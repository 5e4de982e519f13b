use anyhow::Result;
use httpmock::prelude::*;
use pocket_guide_client::{ClientConfig, PocketGuideClient};

fn client_for(server: &MockServer) -> PocketGuideClient {
    PocketGuideClient::new(&ClientConfig::new(server.base_url())).unwrap()
}

#[tokio::test]
async fn test_list_city_pois() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/pois/rome");
        then.status(200).json_body(serde_json::json!({
            "city": "rome",
            "pois": [
                {"poi_id": "colosseum", "name": "Colosseum", "city": "rome", "category": "monument"},
                {"poi_id": "pantheon", "name": "Pantheon", "city": "rome"}
            ]
        }));
    });

    let client = client_for(&server);
    let pois = client.pois().list_city("rome").await?;

    mock.assert();
    assert_eq!(pois.pois.len(), 2);
    assert_eq!(pois.pois[0].category.as_deref(), Some("monument"));
    assert!(pois.pois[1].category.is_none());
    Ok(())
}

#[tokio::test]
async fn test_get_poi_details() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/pois/rome/colosseum");
        then.status(200).json_body(serde_json::json!({
            "poi_id": "colosseum",
            "name": "Colosseum",
            "city": "rome",
            "description": "Flavian amphitheatre",
            "latitude": 41.8902,
            "longitude": 12.4922
        }));
    });

    let client = client_for(&server);
    let poi = client.pois().get("rome", "colosseum").await?;

    mock.assert();
    assert_eq!(poi.name, "Colosseum");
    assert_eq!(poi.latitude, Some(41.8902));
    Ok(())
}

#[tokio::test]
async fn test_transcript_defaults_language_to_english() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/pois/rome/colosseum/transcript")
            .query_param("language", "en");
        then.status(200).json_body(serde_json::json!({
            "poi_id": "colosseum",
            "language": "en",
            "transcript": "Welcome to the Colosseum..."
        }));
    });

    let client = client_for(&server);
    let transcript = client.pois().transcript("rome", "colosseum", None, None).await?;

    mock.assert();
    assert!(transcript.transcript.starts_with("Welcome"));
    assert!(transcript.tour_id.is_none());
    Ok(())
}

#[tokio::test]
async fn test_transcript_forwards_language_and_tour_id() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/pois/rome/colosseum/transcript")
            .query_param("language", "it")
            .query_param("tour_id", "tour-123");
        then.status(200).json_body(serde_json::json!({
            "poi_id": "colosseum",
            "language": "it",
            "transcript": "Benvenuti al Colosseo...",
            "tour_id": "tour-123"
        }));
    });

    let client = client_for(&server);
    let transcript = client
        .pois()
        .transcript("rome", "colosseum", Some("it"), Some("tour-123"))
        .await?;

    mock.assert();
    assert_eq!(transcript.language, "it");
    assert_eq!(transcript.tour_id.as_deref(), Some("tour-123"));
    Ok(())
}

#[tokio::test]
async fn test_missing_poi_is_not_found() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/pois/rome/atlantis");
        then.status(404);
    });

    let client = client_for(&server);
    let err = client.pois().get("rome", "atlantis").await.unwrap_err();

    assert!(err.is_not_found());
}
