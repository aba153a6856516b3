use tdb_client::{ClientError, QueryKind};
use tdb_proto::{query_manager, r#type::Encoding, transaction};
use tdb_test_utils::{answer, entity, string_attribute, type_concept, MockServer, Reply};

fn query_text(server: &MockServer, stream: usize) -> String {
    match server.frames(stream)[1].req.as_ref() {
        Some(transaction::req::Req::QueryManagerReq(query_manager::Req {
            req: Some(query_manager::req::Req::MatchReq(m)),
            ..
        })) => m.query.clone(),
        other => panic!("expected match request, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_list_and_contains() {
    let server = MockServer::new(["zoo"]);
    let client = server.client();

    assert!(!client.contains_database("farm").await.unwrap());
    client.create_database("farm").await.unwrap();
    assert!(client.contains_database("farm").await.unwrap());

    let mut names = client.databases().await.unwrap();
    names.sort();
    assert_eq!(names, vec!["farm", "zoo"]);
}

#[tokio::test]
async fn test_create_existing_database_is_server_error() {
    let server = MockServer::new(["zoo"]);
    let client = server.client();

    let err = client.create_database("zoo").await.unwrap_err();
    assert!(matches!(err, ClientError::ServerError(msg) if msg.contains("already exists")));
}

#[tokio::test]
async fn test_database_calls_while_offline() {
    let server = MockServer::new(["zoo"]);
    server.set_offline(true);
    let client = server.client();

    assert!(client.databases().await.unwrap_err().is_connection());
    assert!(client.create_database("farm").await.unwrap_err().is_connection());
    assert!(client.contains_database("zoo").await.unwrap_err().is_connection());
}

#[tokio::test]
async fn test_empty_database_name_rejected() {
    let server = MockServer::new(["zoo"]);
    let client = server.client();

    assert_eq!(client.create_database("").await.unwrap_err().code(), "INVALID_ARGUMENT");
    assert_eq!(client.contains_database(" ").await.unwrap_err().code(), "INVALID_ARGUMENT");
    assert!(server.databases().len() == 1);
}

#[tokio::test]
async fn test_schema_of_selected_database() {
    let server = MockServer::new(["zoo"]);
    server.set_schema("zoo", "define\nanimal sub entity;\n");
    let client = server.client();

    let err = client.schema().await.unwrap_err();
    assert!(matches!(err, ClientError::SessionError(_)));

    client.open_database("zoo").await.unwrap();
    assert_eq!(client.schema().await.unwrap(), "define\nanimal sub entity;\n");
}

#[tokio::test]
async fn test_convenience_queries() {
    let server = MockServer::new(["zoo"]);
    let client = server.client();
    client.open_database("zoo").await.unwrap();

    server.reply(Reply::Pages(vec![vec![
        answer([("x", type_concept("entity", Encoding::EntityType))]),
        answer([("x", type_concept("animal", Encoding::EntityType))]),
    ]]));
    let entities = client.all_entities().await.unwrap();
    assert_eq!(entities.len(), 2);
    assert_eq!(query_text(&server, 0), "match $x sub entity; get $x;");

    client.all_relations().await.unwrap();
    assert_eq!(query_text(&server, 1), "match $x sub relation; get $x;");

    client.all_attributes().await.unwrap();
    assert_eq!(query_text(&server, 2), "match $x sub attribute; get $x;");

    // Read-only: nothing committed
    for stream in 0..3 {
        assert!(!server.frame_kinds(stream).contains(&"commit"));
    }
}

#[tokio::test]
async fn test_attributes_of_type_deduplicates_by_label() {
    let server = MockServer::new(["zoo"]);
    let client = server.client();
    client.open_database("zoo").await.unwrap();

    server.reply(Reply::Pages(vec![
        vec![
            answer([("a", string_attribute("name", "Alice"))]),
            answer([("a", string_attribute("name", "Bob"))]),
        ],
        vec![
            answer([("a", string_attribute("email", "bob@example.com"))]),
            answer([("p", entity("person", 1))]),
        ],
    ]));

    let attributes = client.attributes_of("person").await.unwrap();
    assert_eq!(attributes.keys().collect::<Vec<_>>(), vec!["email", "name"]);
    assert_eq!(
        attributes["name"].encoding,
        tdb_client::Encoding::AttributeType
    );
    assert_eq!(
        query_text(&server, 0),
        "match $p isa person; $p has attribute $a; get $a;"
    );
}

#[tokio::test]
async fn test_attributes_of_rejects_query_fragments() {
    let server = MockServer::new(["zoo"]);
    let client = server.client();
    client.open_database("zoo").await.unwrap();

    let err = client.attributes_of("person; delete $p").await.unwrap_err();
    assert_eq!(err.code(), "INVALID_ARGUMENT");
    assert_eq!(server.streams(), 0);
}

#[tokio::test]
async fn test_empty_query_rejected() {
    let server = MockServer::new(["zoo"]);
    let client = server.client();
    client.open_database("zoo").await.unwrap();

    let err = client.query("   ", QueryKind::Match).await.err().unwrap();
    assert_eq!(err.code(), "INVALID_ARGUMENT");
}
