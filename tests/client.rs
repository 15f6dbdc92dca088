mod utils;

use crate::utils::{argument_absent, body_as_json, body_from_file, rpc_method};
use serde_json::json;
use std::time::Duration;
use transmission_rpc_client::client::{TransmissionClient, TransmissionError};
use transmission_rpc_client::entities::{Encryption, Priority, Status, Weekdays};
use transmission_rpc_client::fields::{SessionField, TorrentField};
use transmission_rpc_client::ids::{Identifier, TorrentId};
use transmission_rpc_client::requests::{
    AddTorrentRequest, Cookie, SetSessionRequest, SetTorrentRequest,
};
use transmission_rpc_client::units::UnitConversion;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RPC_PATH: &str = "/transmission/rpc";
const SESSION_ID: &str = "X-Transmission-Session-Id";

// Helper function to create a client with a mock server
async fn setup_client() -> (MockServer, TransmissionClient) {
    // Start a lightweight mock server.
    let server = MockServer::start().await;

    let client = TransmissionClient::builder()
        .url(server.uri())
        .build()
        .unwrap();

    (server, client)
}

fn json_response(response_file: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .append_header("content-type", "application/json")
        .set_body_string(body_from_file(response_file))
}

// Helper function to create a mock for any RPC call
async fn create_rpc_mock(server: &MockServer, rpc: &str, response_file: &str) {
    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .and(header("content-type", "application/json"))
        .and(rpc_method(rpc))
        .respond_with(json_response(response_file))
        .expect(1)
        .mount(server)
        .await;
}

// Helper function to create a mock expecting an exact request body
async fn create_body_mock(server: &MockServer, body: serde_json::Value, response_file: &str) {
    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .and(body_json(body))
        .respond_with(json_response(response_file))
        .expect(1)
        .mount(server)
        .await;
}

fn transmission_error(err: &anyhow::Error) -> &TransmissionError {
    err.downcast_ref::<TransmissionError>()
        .expect("Not a TransmissionError")
}

#[tokio::test]
async fn test_session_id_handshake() {
    let (server, client) = setup_client().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .respond_with(
            ResponseTemplate::new(409)
                .append_header(SESSION_ID, "fresh-token")
                .set_body_string("<h1>409: Conflict</h1>"),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .and(header(SESSION_ID, "fresh-token"))
        .respond_with(json_response("test-files/empty_success.json"))
        .expect(2)
        .mount(&server)
        .await;

    client
        .start_torrents(Identifier::list([TorrentId::Id(2), TorrentId::Hash("abcde".into())]))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].body, requests[1].body);
    assert_eq!(
        requests[1]
            .headers
            .get(SESSION_ID)
            .unwrap()
            .to_str()
            .unwrap(),
        "fresh-token"
    );
    assert_eq!(
        body_as_json(&requests[0]),
        json!({"method": "torrent-start", "arguments": {"ids": [2, "abcde"]}})
    );

    // The refreshed token is kept for later calls
    client.close_session().await.unwrap();
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    assert_eq!(
        requests[2]
            .headers
            .get(SESSION_ID)
            .unwrap()
            .to_str()
            .unwrap(),
        "fresh-token"
    );

    server.verify().await;
}

#[tokio::test]
async fn test_session_id_rejected_twice() {
    let (server, client) = setup_client().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .respond_with(ResponseTemplate::new(409).append_header(SESSION_ID, "token"))
        .expect(2)
        .mount(&server)
        .await;

    let err = client.close_session().await.unwrap_err();
    assert!(matches!(
        transmission_error(&err),
        TransmissionError::TokenRejected
    ));

    server.verify().await;
}

#[tokio::test]
async fn test_http_error_after_session_id_refresh() {
    let (server, client) = setup_client().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .respond_with(ResponseTemplate::new(409).append_header(SESSION_ID, "token"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_session_stats().await.unwrap_err();
    match transmission_error(&err) {
        TransmissionError::Http { status, .. } => assert_eq!(*status, 500),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(server.received_requests().await.unwrap().len(), 2);

    server.verify().await;
}

#[tokio::test]
async fn test_conflict_without_session_id_header() {
    let (server, client) = setup_client().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .respond_with(ResponseTemplate::new(409))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .respond_with(json_response("test-files/empty_success.json"))
        .expect(1)
        .mount(&server)
        .await;

    client.close_session().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[1]
            .headers
            .get(SESSION_ID)
            .unwrap()
            .to_str()
            .unwrap(),
        ""
    );

    server.verify().await;
}

#[tokio::test]
async fn test_http_error_is_not_retried() {
    let (server, client) = setup_client().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_session_stats().await.unwrap_err();
    match transmission_error(&err) {
        TransmissionError::Http { status, reason } => {
            assert_eq!(*status, 500);
            assert_eq!(reason, "Internal Server Error");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    server.verify().await;
}

#[tokio::test]
async fn test_rpc_failure() {
    let (server, client) = setup_client().await;

    create_rpc_mock(&server, "torrent-stop", "test-files/rpc_failure.json").await;

    let err = client.stop_torrents(Identifier::Id(1)).await.unwrap_err();
    match transmission_error(&err) {
        TransmissionError::Rpc(result) => assert_eq!(result, "failure-reason"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(format!("{err:#}").contains("failure-reason"));

    server.verify().await;
}

#[tokio::test]
async fn test_malformed_response() {
    let (server, client) = setup_client().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client.is_port_open().await.unwrap_err();
    assert!(matches!(
        transmission_error(&err),
        TransmissionError::InvalidResponse(_)
    ));
}

#[tokio::test]
async fn test_invalid_tracker_url() {
    let (server, client) = setup_client().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "arguments": {"torrents": [{"id": 1, "trackers": [{"announce": "http://[::1", "id": 0, "scrape": "", "tier": 0}]}]},
            "result": "success"
        })))
        .mount(&server)
        .await;

    let err = client
        .get_torrents(Identifier::Id(1), &[TorrentField::Trackers])
        .await
        .unwrap_err();
    assert!(matches!(
        transmission_error(&err),
        TransmissionError::InvalidResponse(_)
    ));
}

#[tokio::test]
async fn test_cancellation_stops_retry() {
    let (server, client) = setup_client().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .respond_with(
            ResponseTemplate::new(409)
                .append_header(SESSION_ID, "token")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let result = tokio::time::timeout(Duration::from_millis(100), client.close_session()).await;
    assert!(result.is_err());

    tokio::time::sleep(Duration::from_millis(700)).await;
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_basic_auth_and_user_agent() {
    let server = MockServer::start().await;
    let client = TransmissionClient::builder()
        .url(server.uri())
        .username("test")
        .password("test123")
        .user_agent("transmission-rpc-client-tests")
        .timeout(1000)
        .build()
        .unwrap();

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .and(header("authorization", "Basic dGVzdDp0ZXN0MTIz"))
        .and(header("user-agent", "transmission-rpc-client-tests"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"method": "port-test"})))
        .respond_with(json_response("test-files/port_test_success.json"))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.is_port_open().await.unwrap());

    server.verify().await;
}

#[tokio::test]
async fn test_custom_http_client_and_path() {
    let server = MockServer::start().await;
    let client = TransmissionClient::builder()
        .url(format!("{}/custom/rpc", server.uri()))
        .http_client(reqwest::Client::new())
        .build()
        .unwrap();

    Mock::given(method("POST"))
        .and(path("/custom/rpc"))
        .respond_with(json_response("test-files/blocklist_update_success.json"))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.update_blocklist().await.unwrap(), 393);

    server.verify().await;
}

#[tokio::test]
async fn test_get_torrents() {
    let (server, client) = setup_client().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .and(rpc_method("torrent-get"))
        .and(argument_absent("ids"))
        .respond_with(json_response("test-files/torrent_get_success.json"))
        .expect(1)
        .mount(&server)
        .await;

    let torrents = client.get_torrents(Identifier::All, &[]).await.unwrap();

    server.verify().await;

    // Every field is requested when none are given
    let requests = server.received_requests().await.unwrap();
    let body = body_as_json(&requests[0]);
    assert_eq!(
        body["arguments"]["fields"].as_array().unwrap().len(),
        TorrentField::ALL.len()
    );
    assert_eq!(body["arguments"]["fields"][0], "id");

    // Verify the response data
    assert_eq!(torrents.len(), 1);
    let torrent = &torrents[0];
    assert_eq!(torrent.id, 1);
    assert_eq!(torrent.hash, "fd2ebc3d3c25c7a0a82e35a3e8af2dc5a8b2c5b1");
    assert_eq!(torrent.name, "ubuntu-19.10-live-server-amd64.iso");
    assert_eq!(torrent.status, Status::Seeding);
    assert_eq!(torrent.labels, vec!["linux", "iso"]);
    assert_eq!(torrent.eta, None);
    assert_eq!(torrent.done_at, None);
    assert_eq!(torrent.can_manually_announce_at, None);
    assert_eq!(torrent.added_at.unwrap().timestamp(), 1_576_856_553);
    assert_eq!(torrent.idle_seeding_limit, Duration::from_secs(30 * 60));
    assert_eq!(torrent.seeding_for, Duration::from_secs(3600));
    // Neutral units until the session is fetched
    assert_eq!(torrent.download_rate_limit, 100);
    assert_eq!(torrent.upload_rate_limit, 50);
    assert_eq!(torrent.wanted, vec![true]);
    assert_eq!(torrent.priorities, vec![Priority::High]);
    assert_eq!(torrent.files[0].size, 2_097_152);
    assert!(torrent.file_stats[0].wanted);

    assert!(torrent.pieces.is_downloaded(0));
    assert!(torrent.pieces.is_downloaded(1));
    assert!(!torrent.pieces.is_downloaded(2));
    assert!(!torrent.pieces.is_downloaded(40));
    assert!(!torrent.pieces.is_downloaded(-1));

    let peer = &torrent.peers[0];
    assert_eq!(peer.address.unwrap().to_string(), "192.168.1.10");
    assert_eq!(peer.port, 51413);
    assert!(peer.is_utp);
    assert_eq!(torrent.peers_from.dht, 1);

    assert_eq!(
        torrent.trackers[0].announce_url.as_ref().unwrap().as_str(),
        "https://torrent.ubuntu.com/announce"
    );
    assert_eq!(torrent.trackers[0].scrape_url, None);
    let stat = &torrent.tracker_stats[0];
    assert_eq!(stat.seeders, 345);
    assert!(!stat.is_last_scrape_timed_out);
    assert_eq!(stat.last_announce_start_time, None);

    assert_eq!(torrent.calculate_size(), "2.10 MB");
    assert_eq!(torrent.calculate_progress(), 100.0);
}

#[tokio::test]
async fn test_get_torrents_with_fields() {
    let (server, client) = setup_client().await;

    create_body_mock(
        &server,
        json!({
            "method": "torrent-get",
            "arguments": {"ids": [2, "abcde"], "fields": ["id", "name", "status"]}
        }),
        "test-files/torrent_get_removed.json",
    )
    .await;

    let torrents = client
        .get_torrents(
            Identifier::list([TorrentId::Id(2), TorrentId::Hash("abcde".into())]),
            &[TorrentField::Id, TorrentField::Name, TorrentField::Status],
        )
        .await
        .unwrap();

    server.verify().await;

    assert_eq!(torrents.len(), 1);
    assert_eq!(torrents[0].id, 1);
    assert_eq!(torrents[0].name, "");
}

#[tokio::test]
async fn test_get_recently_removed_torrent_ids() {
    let (server, client) = setup_client().await;

    create_body_mock(
        &server,
        json!({
            "method": "torrent-get",
            "arguments": {"ids": "recently-active", "fields": ["id"]}
        }),
        "test-files/torrent_get_removed.json",
    )
    .await;

    let removed = client.get_recently_removed_torrent_ids().await.unwrap();

    server.verify().await;

    assert_eq!(removed, vec![3, 7]);
}

#[tokio::test]
async fn test_add_torrent_from_url() {
    let (server, client) = setup_client().await;

    create_body_mock(
        &server,
        json!({
            "method": "torrent-add",
            "arguments": {
                "filename": "http://example.com/ubuntu.torrent",
                "cookies": "session=abc; lang=en",
                "download-dir": "/downloads",
                "paused": true
            }
        }),
        "test-files/torrent_add_success.json",
    )
    .await;

    let request = AddTorrentRequest {
        cookies: vec![Cookie::new("session", "abc"), Cookie::new("lang", "en")],
        download_directory: Some("/downloads".into()),
        paused: Some(true),
        ..AddTorrentRequest::from_url("http://example.com/ubuntu.torrent")
    };
    let torrent = client.add_torrent(&request).await.unwrap();

    server.verify().await;

    assert_eq!(torrent.id, 1);
    assert_eq!(torrent.hash, "fd2ebc3d3c25c7a0a82e35a3e8af2dc5a8b2c5b1");
    assert_eq!(torrent.name, "ubuntu-19.10-live-server-amd64.iso");
}

#[tokio::test]
async fn test_add_torrent_from_metainfo_duplicate() {
    let (server, client) = setup_client().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .and(rpc_method("torrent-add"))
        .and(argument_absent("filename"))
        .and(body_partial_json(
            json!({"arguments": {"metainfo": "dG9ycmVudC1jb250ZW50cw=="}}),
        ))
        .respond_with(json_response("test-files/torrent_add_duplicate.json"))
        .expect(1)
        .mount(&server)
        .await;

    let torrent = client
        .add_torrent(&AddTorrentRequest::from_metainfo(b"torrent-contents".to_vec()))
        .await
        .unwrap();

    server.verify().await;

    assert_eq!(torrent.id, 1);
}

#[tokio::test]
async fn test_add_torrent_validation() {
    let (server, client) = setup_client().await;

    let both = AddTorrentRequest {
        metainfo: Some(b"torrent-contents".to_vec()),
        ..AddTorrentRequest::from_url("magnet:?xt=urn:btih:fd2ebc3d3c25c7a0")
    };
    let err = client.add_torrent(&both).await.unwrap_err();
    assert!(matches!(
        transmission_error(&err),
        TransmissionError::InvalidInput(_)
    ));

    let err = client
        .add_torrent(&AddTorrentRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(
        transmission_error(&err),
        TransmissionError::InvalidInput(_)
    ));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_set_torrents_with_neutral_units() {
    let (server, client) = setup_client().await;

    create_body_mock(
        &server,
        json!({
            "method": "torrent-set",
            "arguments": {
                "ids": [2, "abcde"],
                "downloadLimit": 10_240_000,
                "downloadLimited": true,
                "seedIdleLimit": 90,
                "trackerAdd": ["http://tracker.example.com/announce"],
                "trackerRemove": [3]
            }
        }),
        "test-files/empty_success.json",
    )
    .await;

    let request = SetTorrentRequest {
        download_rate_limit: Some(10_240_000),
        download_rate_limit_enabled: Some(true),
        idle_seeding_limit: Some(Duration::from_secs(90 * 60)),
        trackers_to_add: vec!["http://tracker.example.com/announce".into()],
        trackers_to_remove: vec![3],
        ..Default::default()
    };
    client
        .set_torrents(
            Identifier::list([TorrentId::Id(2), TorrentId::Hash("abcde".into())]),
            &request,
        )
        .await
        .unwrap();

    server.verify().await;

    assert_eq!(client.unit_conversion().await, UnitConversion::default());
}

#[tokio::test]
async fn test_unit_conversion_round_trip() {
    let (server, client) = setup_client().await;

    create_body_mock(
        &server,
        json!({"method": "session-get", "arguments": {}}),
        "test-files/session_get_success.json",
    )
    .await;
    create_body_mock(
        &server,
        json!({
            "method": "session-set",
            "arguments": {
                "speed-limit-down": 10240,
                "alt-speed-up": 50,
                "cache-size-mb": 4,
                "queue-stalled-minutes": 30,
                "alt-speed-time-day": 65,
                "encryption": "required"
            }
        }),
        "test-files/empty_success.json",
    )
    .await;

    let session = client.get_session(&[]).await.unwrap();

    assert_eq!(session.download_rate_limit, 10_240_000);
    assert_eq!(session.upload_rate_limit, 100_000);
    assert_eq!(session.turtle_download_rate_limit, 50_000);
    assert_eq!(session.cache_size, 4_000_000);
    assert_eq!(session.queue_stalled, Duration::from_secs(30 * 60));
    assert_eq!(session.idle_seeding_limit, Duration::from_secs(30 * 60));
    assert_eq!(session.turtle_schedule_on_days, Weekdays::EVERY_DAY);
    assert_eq!(session.encryption, Encryption::Preferred);
    assert_eq!(session.peer_port, 51413);
    assert_eq!(session.rpc_version, 15);
    assert_eq!(session.version, "2.94 (d8e60ee44f)");
    assert_eq!(
        client.unit_conversion().await,
        UnitConversion {
            speed: 1000,
            size: 1000,
            memory: 1000
        }
    );

    let request = SetSessionRequest {
        download_rate_limit: Some(session.download_rate_limit),
        turtle_upload_rate_limit: Some(session.turtle_upload_rate_limit),
        cache_size: Some(session.cache_size),
        queue_stalled: Some(session.queue_stalled),
        turtle_schedule_on_days: Some(Weekdays::WEEKENDS),
        encryption: Some(Encryption::Required),
        ..Default::default()
    };
    client.set_session(&request).await.unwrap();

    server.verify().await;
}

#[tokio::test]
async fn test_session_without_units_keeps_table() {
    let (server, client) = setup_client().await;

    create_body_mock(
        &server,
        json!({"method": "session-get", "arguments": {}}),
        "test-files/session_get_success.json",
    )
    .await;
    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .and(body_json(json!({
            "method": "session-get",
            "arguments": {"fields": ["speed-limit-down", "version"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "arguments": {"speed-limit-down": 20, "version": "2.94 (d8e60ee44f)"},
            "result": "success"
        })))
        .expect(1)
        .mount(&server)
        .await;
    create_rpc_mock(&server, "torrent-get", "test-files/torrent_get_success.json").await;

    client.get_session(&[]).await.unwrap();
    let session = client
        .get_session(&[SessionField::DownloadRateLimit, SessionField::Version])
        .await
        .unwrap();
    assert_eq!(session.download_rate_limit, 20_000);

    let torrents = client
        .get_torrents(Identifier::Id(1), &[TorrentField::DownloadRateLimit])
        .await
        .unwrap();
    assert_eq!(torrents[0].download_rate_limit, 100_000);
    assert_eq!(torrents[0].upload_rate_limit, 50_000);

    server.verify().await;
}

#[tokio::test]
async fn test_get_session_stats() {
    let (server, client) = setup_client().await;

    create_body_mock(
        &server,
        json!({"method": "session-stats"}),
        "test-files/session_stats_success.json",
    )
    .await;

    let stats = client.get_session_stats().await.unwrap();

    server.verify().await;

    assert_eq!(stats.torrents, 1);
    assert_eq!(stats.active_torrents, 1);
    assert_eq!(stats.upload_rate, 512);
    assert_eq!(stats.current_session.active_for, Duration::from_secs(3600));
    assert_eq!(stats.all_sessions.sessions, 14);
    assert_eq!(stats.all_sessions.downloaded, 107_374_182_400);
}

#[tokio::test]
async fn test_torrent_actions() {
    let (server, client) = setup_client().await;

    for rpc in [
        "torrent-start",
        "torrent-start-now",
        "torrent-stop",
        "torrent-verify",
        "torrent-reannounce",
    ] {
        create_rpc_mock(&server, rpc, "test-files/empty_success.json").await;
    }

    client.start_torrents(Identifier::All).await.unwrap();
    client.start_torrents_now(Identifier::Id(1)).await.unwrap();
    client
        .stop_torrents(Identifier::Hash("abcde".into()))
        .await
        .unwrap();
    client
        .verify_torrents(Identifier::list([1_i64]))
        .await
        .unwrap();
    client
        .reannounce_torrents(Identifier::RecentlyActive)
        .await
        .unwrap();

    server.verify().await;

    let bodies: Vec<_> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(body_as_json)
        .collect();
    assert_eq!(bodies[0], json!({"method": "torrent-start", "arguments": {}}));
    assert_eq!(bodies[1]["arguments"], json!({"ids": 1}));
    assert_eq!(bodies[2]["arguments"], json!({"ids": "abcde"}));
    assert_eq!(bodies[3]["arguments"], json!({"ids": [1]}));
    assert_eq!(bodies[4]["arguments"], json!({"ids": "recently-active"}));
}

#[tokio::test]
async fn test_queue_movement() {
    let (server, client) = setup_client().await;

    for rpc in [
        "queue-move-top",
        "queue-move-bottom",
        "queue-move-up",
        "queue-move-down",
    ] {
        create_rpc_mock(&server, rpc, "test-files/empty_success.json").await;
    }

    client.queue_move_to_top(Identifier::Id(1)).await.unwrap();
    client.queue_move_to_bottom(Identifier::Id(2)).await.unwrap();
    client.queue_move_up(Identifier::Id(3)).await.unwrap();
    client.queue_move_down(Identifier::Id(4)).await.unwrap();

    server.verify().await;
}

#[tokio::test]
async fn test_remove_torrents() {
    let (server, client) = setup_client().await;

    create_body_mock(
        &server,
        json!({"method": "torrent-remove", "arguments": {"ids": 1, "delete-local-data": true}}),
        "test-files/empty_success.json",
    )
    .await;

    client.remove_torrents(Identifier::Id(1), true).await.unwrap();

    server.verify().await;
}

#[tokio::test]
async fn test_set_torrents_location() {
    let (server, client) = setup_client().await;

    create_body_mock(
        &server,
        json!({
            "method": "torrent-set-location",
            "arguments": {"ids": [1, 2], "location": "/downloads/archive", "move": true}
        }),
        "test-files/empty_success.json",
    )
    .await;

    client
        .set_torrents_location(Identifier::list([1_i64, 2]), "/downloads/archive", true)
        .await
        .unwrap();

    let err = client
        .set_torrents_location(Identifier::Id(1), "", false)
        .await
        .unwrap_err();
    assert!(matches!(
        transmission_error(&err),
        TransmissionError::InvalidInput(_)
    ));

    server.verify().await;
}

#[tokio::test]
async fn test_rename_torrent_path() {
    let (server, client) = setup_client().await;

    create_body_mock(
        &server,
        json!({
            "method": "torrent-rename-path",
            "arguments": {
                "ids": "fd2ebc3d3c25c7a0a82e35a3e8af2dc5a8b2c5b1",
                "path": "ubuntu-19.10-live-server-amd64.iso",
                "name": "ubuntu.iso"
            }
        }),
        "test-files/torrent_rename_path_success.json",
    )
    .await;

    let renamed = client
        .rename_torrent_path(
            TorrentId::Hash("fd2ebc3d3c25c7a0a82e35a3e8af2dc5a8b2c5b1".into()),
            "ubuntu-19.10-live-server-amd64.iso",
            "ubuntu.iso",
        )
        .await
        .unwrap();

    server.verify().await;

    assert_eq!(renamed.id, 1);
    assert_eq!(renamed.name, "ubuntu.iso");
}

#[tokio::test]
async fn test_get_free_space() {
    let (server, client) = setup_client().await;

    create_body_mock(
        &server,
        json!({"method": "free-space", "arguments": {"path": "/downloads"}}),
        "test-files/free_space_success.json",
    )
    .await;

    assert_eq!(
        client.get_free_space("/downloads").await.unwrap(),
        107_374_182_400
    );

    server.verify().await;
}

#[tokio::test]
async fn test_update_blocklist_and_port_test() {
    let (server, client) = setup_client().await;

    create_body_mock(
        &server,
        json!({"method": "blocklist-update"}),
        "test-files/blocklist_update_success.json",
    )
    .await;
    create_body_mock(
        &server,
        json!({"method": "port-test"}),
        "test-files/port_test_success.json",
    )
    .await;

    assert_eq!(client.update_blocklist().await.unwrap(), 393);
    assert!(client.is_port_open().await.unwrap());

    server.verify().await;
}

#[tokio::test]
async fn test_close_session() {
    let (server, client) = setup_client().await;

    create_body_mock(
        &server,
        json!({"method": "session-close"}),
        "test-files/empty_success.json",
    )
    .await;

    client.close_session().await.unwrap();

    server.verify().await;
}
