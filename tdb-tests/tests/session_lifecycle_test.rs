use std::time::Duration;
use tdb_client::{ClientConfig, ClientError};
use tdb_test_utils::{Event, MockServer};

/// Pulses sent for one session
fn pulses_for(server: &MockServer, session_id: &[u8]) -> usize {
    server
        .events()
        .iter()
        .filter(|e| matches!(e, Event::Pulse { session_id: id } if id == session_id))
        .count()
}

/// Heartbeat fires immediately on open, then once per interval
#[tokio::test(start_paused = true)]
async fn test_heartbeat_armed_only_while_session_open() {
    let server = MockServer::new(["zoo"]);
    let client = server.client();

    assert!(!client.sessions().is_pulsing().await);

    let id = client.open_database("zoo").await.unwrap();
    assert!(client.sessions().is_pulsing().await);

    tokio::time::sleep(Duration::from_millis(10_100)).await;
    assert_eq!(server.pulses(), 3);
    assert_eq!(pulses_for(&server, id.as_bytes()), 3);
    assert_eq!(client.sessions().pulses_sent().await, 3);

    client.close_database().await.unwrap();
    assert!(!client.sessions().is_pulsing().await);

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(server.pulses(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_custom_pulse_interval() {
    let server = MockServer::new(["zoo"]);
    let client = server.client_with(ClientConfig::default().with_pulse_interval(Duration::from_secs(1)));

    client.open_database("zoo").await.unwrap();
    tokio::time::sleep(Duration::from_millis(4_500)).await;

    // t = 0, 1, 2, 3, 4
    assert_eq!(server.pulses(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_dead_session_pulses_are_not_fatal() {
    let server = MockServer::new(["zoo"]);
    server.set_dead_pulses(true);
    let client = server.client();

    client.open_database("zoo").await.unwrap();
    tokio::time::sleep(Duration::from_secs(12)).await;

    assert_eq!(server.pulses(), 3);
    assert!(client.sessions().is_pulsing().await);
    assert!(client.sessions().active().await.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_pulse_failures_keep_heartbeat_running() {
    let server = MockServer::new(["zoo"]);
    let client = server.client();
    client.open_database("zoo").await.unwrap();

    server.set_offline(true);
    tokio::time::sleep(Duration::from_secs(11)).await;
    assert!(client.sessions().is_pulsing().await);

    server.set_offline(false);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(server.pulses(), 2);
}

#[tokio::test]
async fn test_double_close_reaches_server_and_fails() {
    let server = MockServer::new(["zoo"]);
    let client = server.client();

    let id = client.open_database("zoo").await.unwrap();
    client.close_database().await.unwrap();

    let err = client.close_database().await.unwrap_err();
    assert!(matches!(err, ClientError::SessionError(_)));
    assert_eq!(server.close_calls(id.as_bytes()), 2);
}

#[tokio::test]
async fn test_close_without_open() {
    let server = MockServer::new(["zoo"]);
    let client = server.client();

    let err = client.close_database().await.unwrap_err();
    assert_eq!(err.code(), "SESSION_ERROR");
    assert!(server.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_reopen_closes_previous_session() {
    let server = MockServer::new(["zoo", "farm"]);
    let client = server.client();

    let zoo = client.open_database("zoo").await.unwrap();
    let farm = client.open_database("farm").await.unwrap();
    assert_ne!(zoo, farm);

    assert_eq!(server.close_calls(zoo.as_bytes()), 1);
    let closed = server
        .position(|e| matches!(e, Event::SessionClosed { session_id } if session_id == zoo.as_bytes()))
        .unwrap();
    let opened = server
        .position(|e| matches!(e, Event::SessionOpened { database, .. } if database == "farm"))
        .unwrap();
    assert!(closed < opened);

    let zoo_pulses = pulses_for(&server, zoo.as_bytes());
    tokio::time::sleep(Duration::from_secs(11)).await;
    assert_eq!(pulses_for(&server, zoo.as_bytes()), zoo_pulses);
    assert_eq!(pulses_for(&server, farm.as_bytes()), 3);

    let active = client.sessions().active().await.unwrap();
    assert_eq!(active.database(), "farm");
    assert_eq!(active.id(), &farm);
}

#[tokio::test]
async fn test_open_unknown_database_is_session_error() {
    let server = MockServer::new(["zoo"]);
    let client = server.client();

    let err = client.open_database("aquarium").await.unwrap_err();
    assert!(matches!(err, ClientError::SessionError(msg) if msg.contains("aquarium")));
    assert!(!client.sessions().is_pulsing().await);
    assert!(client.sessions().active().await.is_none());
}

#[tokio::test]
async fn test_open_while_offline_is_connection_error() {
    let server = MockServer::new(["zoo"]);
    server.set_offline(true);
    let client = server.client();

    let err = client.open_database("zoo").await.unwrap_err();
    assert!(err.is_connection());
}

#[tokio::test]
async fn test_empty_database_name_rejected_locally() {
    let server = MockServer::new(["zoo"]);
    let client = server.client();

    let err = client.open_database("  ").await.unwrap_err();
    assert_eq!(err.code(), "INVALID_ARGUMENT");
    assert!(server.events().is_empty());
}

/// A failed re-open leaves no database selected
#[tokio::test(start_paused = true)]
async fn test_failed_reopen_clears_previous_selection() {
    let server = MockServer::new(["zoo"]);
    server.set_schema("zoo", "define zoo;");
    let client = server.client();

    let zoo = client.open_database("zoo").await.unwrap();
    let err = client.open_database("aquarium").await.unwrap_err();
    assert!(matches!(err, ClientError::SessionError(_)));
    assert_eq!(server.close_calls(zoo.as_bytes()), 1);

    assert!(client.sessions().active().await.is_none());
    assert!(client.sessions().current_database().await.is_none());
    assert!(!client.sessions().is_pulsing().await);

    let err = client.schema().await.unwrap_err();
    assert_eq!(err.code(), "SESSION_ERROR");

    // Nothing left to close; the old session is not closed a second time
    let err = client.close_database().await.unwrap_err();
    assert_eq!(err.code(), "SESSION_ERROR");
    assert_eq!(server.close_calls(zoo.as_bytes()), 1);

    let pulses = server.pulses();
    tokio::time::sleep(Duration::from_secs(11)).await;
    assert_eq!(server.pulses(), pulses);
}

#[tokio::test]
async fn test_zero_pulse_interval_rejected_on_open() {
    let server = MockServer::new(["zoo"]);
    let client = server.client_with(ClientConfig::default().with_pulse_interval(Duration::ZERO));

    let err = client.open_database("zoo").await.unwrap_err();
    assert_eq!(err.code(), "INVALID_ARGUMENT");
    assert!(server.events().is_empty());
    assert!(client.sessions().active().await.is_none());
    assert!(!client.sessions().is_pulsing().await);
}
