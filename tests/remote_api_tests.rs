//! Inventory and progress endpoints against a local mock server.

use firstboot_agent::error::InventoryError;
use firstboot_agent::models::Stage;
use firstboot_agent::remote::{InventoryClient, ProgressReporter};

#[tokio::test]
async fn inventory_decodes_profile_from_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/inventory")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("sn".into(), "SN123".into()),
            mockito::Matcher::UrlEncoded("type".into(), "json".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"Status":"success","Message":"","Content":{
                "Hostname":"HOST-01","Ip":"10.0.0.5","Netmask":"255.255.255.0",
                "Gateway":"10.0.0.1","HWADDR":"AA:BB:CC:DD:EE:FF","Vlan":"100"}}"#,
        )
        .create_async()
        .await;

    let client = InventoryClient::with_endpoint(format!("{}/inventory", server.url()));
    let profile = client.fetch_profile("SN123").await.unwrap();

    mock.assert_async().await;
    assert_eq!(profile.hostname, "HOST-01");
    assert_eq!(profile.ip, "10.0.0.5");
    assert_eq!(profile.netmask, "255.255.255.0");
    assert_eq!(profile.gateway, "10.0.0.1");
    assert_eq!(profile.hwaddr, "AA:BB:CC:DD:EE:FF");
    assert_eq!(profile.vlan, "100");
    assert!(profile.bonding.is_empty());
}

#[tokio::test]
async fn inventory_error_carries_http_status_code() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/inventory")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let client = InventoryClient::with_endpoint(format!("{}/inventory", server.url()));
    let err = client.fetch_profile("SN123").await.unwrap_err();

    match err {
        InventoryError::HttpStatus(code) => assert_eq!(code, 500),
        other => panic!("expected HttpStatus, got {other}"),
    }
}

#[tokio::test]
async fn inventory_malformed_body_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/inventory")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let client = InventoryClient::with_endpoint(format!("{}/inventory", server.url()));
    let err = client.fetch_profile("SN123").await.unwrap_err();
    assert!(matches!(err, InventoryError::Decode(_)));
}

#[tokio::test]
async fn progress_report_delivers_exactly_one_event() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/report")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "Sn": "SN123",
            "Title": "change hostname",
            "InstallProgress": 0.75,
            "InstallLog": "change hostname",
        })))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let reporter = ProgressReporter::with_endpoint(format!("{}/report", server.url()));
    reporter
        .report("SN123", Stage::Hostname.event())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn progress_report_failure_still_means_one_delivery() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/report")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let reporter = ProgressReporter::with_endpoint(format!("{}/report", server.url()));
    let result = reporter.report("SN123", Stage::Finish.event()).await;

    assert!(result.is_err());
    mock.assert_async().await;
}
