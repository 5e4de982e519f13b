use anyhow::Result;
use httpmock::prelude::*;
use pocket_guide_client::{
    safe_call, ClientConfig, GenerateTourParams, Pace, PocketGuideClient,
};

fn client_for(server: &MockServer) -> PocketGuideClient {
    PocketGuideClient::new(&ClientConfig::new(server.base_url())).unwrap()
}

fn tour_body() -> serde_json::Value {
    serde_json::json!({
        "tour_id": "tour-123",
        "city": "rome",
        "days": 3,
        "language": "en",
        "itinerary": [
            {
                "day": 1,
                "stops": [
                    {"poi_id": "colosseum", "name": "Colosseum", "duration_minutes": 90}
                ]
            }
        ]
    })
}

#[tokio::test]
async fn test_generate_applies_documented_defaults() -> Result<()> {
    let server = MockServer::start();

    // The wrapper fills in provider/pace/walking/language/mode/save and
    // omits the optional locations.
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/tour/generate")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "city": "rome",
                "days": 3,
                "interests": ["history", "food"],
                "provider": "anthropic",
                "pace": "normal",
                "walking": "moderate",
                "language": "en",
                "mode": "simple",
                "save": true
            }));
        then.status(200).json_body(tour_body());
    });

    let client = client_for(&server);
    let params = GenerateTourParams::new(
        "rome",
        3,
        vec!["history".to_string(), "food".to_string()],
    );
    let tour = client.tour().generate(params).await?;

    mock.assert();
    assert_eq!(tour.tour_id, "tour-123");
    assert_eq!(tour.itinerary.len(), 1);
    assert_eq!(tour.itinerary[0].stops[0].poi_id, "colosseum");
    Ok(())
}

#[tokio::test]
async fn test_generate_forwards_caller_values() -> Result<()> {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/tour/generate")
            .json_body(serde_json::json!({
                "city": "paris",
                "days": 2,
                "interests": ["art"],
                "provider": "anthropic",
                "pace": "relaxed",
                "walking": "moderate",
                "language": "fr",
                "mode": "simple",
                "save": true,
                "start_location": "Gare du Nord",
                "end_location": "Louvre"
            }));
        then.status(200).json_body(tour_body());
    });

    let client = client_for(&server);
    let mut params = GenerateTourParams::new("paris", 2, vec!["art".to_string()]);
    params.pace = Some(Pace::Relaxed);
    params.language = Some("fr".to_string());
    params.start_location = Some("Gare du Nord".to_string());
    params.end_location = Some("Louvre".to_string());

    client.tour().generate(params).await?;

    mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_generate_server_error_keeps_status_and_body() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(POST).path("/tour/generate");
        then.status(502).body("upstream generation engine unavailable");
    });

    let client = client_for(&server);
    let params = GenerateTourParams::new("rome", 3, vec![]);
    let err = client.tour().generate(params).await.unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert!(err.to_string().contains("upstream generation engine unavailable"));
}

#[tokio::test]
async fn test_safe_call_yields_data_or_error_without_propagating() {
    let server = MockServer::start();
    let _ok = server.mock(|when, then| {
        when.method(POST).path("/tour/generate");
        then.status(200).json_body(tour_body());
    });

    let client = client_for(&server);

    let outcome = safe_call(
        client
            .tour()
            .generate(GenerateTourParams::new("rome", 3, vec![])),
    )
    .await;
    assert!(outcome.is_data());
    assert_eq!(outcome.data().unwrap().tour_id, "tour-123");

    // Unroutable port: transport failure surfaces as an outcome value.
    let dead = PocketGuideClient::new(&ClientConfig::new("http://127.0.0.1:1")).unwrap();
    let outcome = safe_call(
        dead.tour()
            .generate(GenerateTourParams::new("rome", 3, vec![])),
    )
    .await;
    assert!(!outcome.is_data());
    assert!(outcome.error().is_some());
}
