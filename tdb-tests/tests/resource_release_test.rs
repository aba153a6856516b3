use futures::StreamExt;
use tdb_client::{AnswerState, ClientError, QueryKind};
use tdb_proto::session;
use tdb_test_utils::{entities, MockServer, Reply};
use tonic::Status;

async fn zoo() -> (MockServer, tdb_client::Client<MockServer>) {
    let server = MockServer::new(["zoo"]);
    let client = server.client();
    client.open_database("zoo").await.unwrap();
    (server, client)
}

fn schema_session(server: &MockServer) -> Vec<u8> {
    server
        .opened_sessions()
        .into_iter()
        .find(|(_, t)| *t == session::Type::Schema)
        .map(|(id, _)| id)
        .expect("no schema session was opened")
}

/// Abandoning a write mid-stream closes the transaction and never commits
#[tokio::test]
async fn test_abandoned_insert_closes_without_commit() {
    let (server, client) = zoo().await;
    server.reply(Reply::Pages(vec![entities("animal", 2), entities("animal", 2)]));

    let mut answers = client.query("insert $x isa animal;", QueryKind::Insert).await.unwrap();
    assert!(answers.next().await.unwrap().is_some());
    assert_eq!(answers.state(), AnswerState::Streaming);
    drop(answers);

    assert!(server.eventually(|s| s.is_stream_closed(0)).await);
    assert!(!server.frame_kinds(0).contains(&"commit"));
}

#[tokio::test]
async fn test_abandoned_match_closes_stream() {
    let (server, client) = zoo().await;
    server.reply(Reply::Pages(vec![entities("animal", 5)]));

    let mut answers = client.query("match $x isa animal; get $x;", QueryKind::Match).await.unwrap();
    answers.next().await.unwrap();
    drop(answers);

    assert!(server.eventually(|s| s.is_stream_closed(0)).await);
    assert_eq!(server.frame_kinds(0), vec!["open", "query"]);
}

/// An abandoned schema change still closes its schema session exactly once
#[tokio::test]
async fn test_abandoned_define_closes_schema_session() {
    let (server, client) = zoo().await;
    server.reply(Reply::Pages(vec![entities("animal", 1), entities("animal", 1)]));

    let mut answers = client.query("define animal sub entity;", QueryKind::Define).await.unwrap();
    assert!(answers.next().await.unwrap().is_some());
    drop(answers);

    let schema_id = schema_session(&server);
    assert!(server.eventually(|s| s.close_calls(&schema_id) == 1).await);
    assert!(server.eventually(|s| s.is_stream_closed(0)).await);
    assert!(!server.frame_kinds(0).contains(&"commit"));
    assert_eq!(server.close_calls(&schema_id), 1);
}

/// A sequence dropped before it is advanced sends nothing
#[tokio::test]
async fn test_unstarted_query_sends_nothing() {
    let (server, client) = zoo().await;

    let answers = client.query("insert $x isa animal;", QueryKind::Insert).await.unwrap();
    assert_eq!(answers.state(), AnswerState::AwaitingOpen);
    drop(answers);

    assert_eq!(server.streams(), 0);
}

#[tokio::test]
async fn test_query_error_releases_stream() {
    let (server, client) = zoo().await;
    server.reply(Reply::Fail(Status::invalid_argument("[TYR03] invalid query syntax")));

    let mut answers = client.query("insert $x isa;", QueryKind::Insert).await.unwrap();
    let err = answers.next().await.unwrap_err();
    assert!(matches!(err, ClientError::QueryError(msg) if msg.contains("TYR03")));

    assert_eq!(answers.state(), AnswerState::Closed);
    assert!(answers.next().await.unwrap().is_none());

    assert!(server.eventually(|s| s.is_stream_closed(0)).await);
    assert!(!server.frame_kinds(0).contains(&"commit"));
}

#[tokio::test]
async fn test_define_error_closes_schema_session_once() {
    let (server, client) = zoo().await;
    server.reply(Reply::Fail(Status::invalid_argument("[TYW01] invalid definition")));

    let err = client
        .execute("define animal sub nothing;", QueryKind::Define)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "QUERY_ERROR");

    let schema_id = schema_session(&server);
    assert_eq!(server.close_calls(&schema_id), 1);
    assert!(server.eventually(|s| s.is_stream_closed(0)).await);
}

#[tokio::test]
async fn test_commit_failure_is_query_error() {
    let (server, client) = zoo().await;
    server.fail_commit(Status::aborted("[TYW05] conflicting write"));

    let err = client.execute("insert $x isa animal;", QueryKind::Insert).await.unwrap_err();
    assert!(matches!(err, ClientError::QueryError(msg) if msg.contains("TYW05")));

    assert_eq!(server.frame_kinds(0), vec!["open", "query", "commit"]);
    assert!(server.eventually(|s| s.is_stream_closed(0)).await);
}

/// Server ending the stream before DONE is a protocol error, and never commits
#[tokio::test]
async fn test_hangup_before_done_is_protocol_error() {
    let (server, client) = zoo().await;
    server.reply(Reply::Hangup);

    let err = client.execute("insert $x isa animal;", QueryKind::Insert).await.unwrap_err();
    assert!(matches!(err, ClientError::ProtocolError(_)));

    assert!(server.eventually(|s| s.is_stream_closed(0)).await);
    assert!(!server.frame_kinds(0).contains(&"commit"));
}

#[tokio::test]
async fn test_transaction_open_rejected() {
    let (server, client) = zoo().await;
    server.fail_transaction_open(Status::failed_precondition("session expired"));

    let err = client
        .execute("match $x sub entity; get $x;", QueryKind::Match)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::ProtocolError(msg) if msg.contains("session expired")));

    assert_eq!(server.frame_kinds(0), vec!["open"]);
    assert!(server.eventually(|s| s.is_stream_closed(0)).await);
}

#[tokio::test]
async fn test_transaction_open_rejected_for_define() {
    let (server, client) = zoo().await;
    server.fail_transaction_open(Status::failed_precondition("schema lock unavailable"));

    client
        .execute("define animal sub entity;", QueryKind::Define)
        .await
        .unwrap_err();

    let schema_id = schema_session(&server);
    assert_eq!(server.close_calls(&schema_id), 1);
    assert!(server.eventually(|s| s.is_stream_closed(0)).await);
}

#[tokio::test]
async fn test_transport_outage_is_connection_error() {
    let (server, client) = zoo().await;
    server.set_offline(true);

    let err = client
        .execute("match $x sub entity; get $x;", QueryKind::Match)
        .await
        .unwrap_err();
    assert!(err.is_connection());
    assert_eq!(server.streams(), 0);
}

#[tokio::test]
async fn test_stream_adapter_yields_all_records() {
    let (server, client) = zoo().await;
    server.reply(Reply::Pages(vec![entities("animal", 2), entities("animal", 1)]));

    let records: Vec<_> = client
        .query("match $x isa animal; get $x;", QueryKind::Match)
        .await
        .unwrap()
        .into_stream()
        .collect()
        .await;

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.is_ok()));
    assert!(server.eventually(|s| s.is_stream_closed(0)).await);
}

#[tokio::test]
async fn test_stream_adapter_ends_after_error() {
    let (server, client) = zoo().await;
    server.reply(Reply::Fail(Status::invalid_argument("bad query")));

    let records: Vec<_> = client
        .query("match $x isa; get $x;", QueryKind::Match)
        .await
        .unwrap()
        .into_stream()
        .collect()
        .await;

    assert_eq!(records.len(), 1);
    assert!(records[0].is_err());
}

/// Cancelling `next()` while the schema session is closing leaves it to `Drop`
#[tokio::test(start_paused = true)]
async fn test_cancelled_schema_session_close_finished_on_drop() {
    let (server, client) = zoo().await;
    server.delay_session_close(std::time::Duration::from_secs(10));

    let mut answers = client.query("define animal sub entity;", QueryKind::Define).await.unwrap();
    let pending = tokio::time::timeout(std::time::Duration::from_secs(1), answers.next()).await;
    assert!(pending.is_err());
    assert_eq!(server.frame_kinds(0), vec!["open", "query", "commit"]);

    let schema_id = schema_session(&server);
    assert_eq!(server.close_calls(&schema_id), 0);

    drop(answers);
    tokio::time::sleep(std::time::Duration::from_secs(20)).await;
    assert_eq!(server.close_calls(&schema_id), 1);
}
