/// Test utilities for the graph database client
///
/// [`MockServer`] implements the client's `Transport` in process. It scripts
/// server replies and records every call and frame it receives, in order.

use async_trait::async_trait;
use futures::StreamExt;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tdb_client::{Client, ClientConfig, InboundFrames, OutboundFrames, Transport};
use tdb_proto::{
    attribute, concept, core_database, core_database_manager, query_manager, r#type, session,
    transaction, Concept, ConceptMap, Thing, Type,
};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tonic::Status;

/// Something the mock server observed
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SessionOpened {
        session_id: Vec<u8>,
        database: String,
        session_type: session::Type,
    },
    /// A close call, whether or not the session was known
    SessionClosed { session_id: Vec<u8> },
    Pulse { session_id: Vec<u8> },
    /// One request received on transaction stream `stream`
    Frame { stream: usize, req: transaction::Req },
    /// The client half-closed transaction stream `stream`
    StreamClosed { stream: usize },
}

/// Scripted reply to the next query frame
#[derive(Debug, Clone)]
pub enum Reply {
    /// Answer pages; each page but the last is followed by CONTINUE
    Pages(Vec<Vec<ConceptMap>>),
    /// One final response carrying no rows
    Final,
    /// The query fails with this status
    Fail(Status),
    /// The server ends the stream without finishing the query
    Hangup,
}

#[derive(Default)]
struct Faults {
    offline: bool,
    open_status: Option<Status>,
    commit_status: Option<Status>,
    foreign_req_id: bool,
    dead_pulses: bool,
    close_delay: Option<Duration>,
}

#[derive(Default)]
struct State {
    events: Vec<Event>,
    databases: BTreeSet<String>,
    schemas: HashMap<String, String>,
    sessions: HashMap<Vec<u8>, (String, session::Type)>,
    replies: VecDeque<Reply>,
    faults: Faults,
}

struct Inner {
    state: Mutex<State>,
    next_session: AtomicU64,
    next_stream: AtomicUsize,
}

/// In-process scripted server
#[derive(Clone)]
pub struct MockServer {
    inner: Arc<Inner>,
}

impl MockServer {
    /// Create a server holding the given databases
    pub fn new<I, S>(databases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let state = State {
            databases: databases.into_iter().map(Into::into).collect(),
            ..Default::default()
        };

        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                next_session: AtomicU64::new(1),
                next_stream: AtomicUsize::new(0),
            }),
        }
    }

    /// Client over this server with the default configuration
    pub fn client(&self) -> Client<MockServer> {
        self.client_with(ClientConfig::default())
    }

    pub fn client_with(&self, config: ClientConfig) -> Client<MockServer> {
        Client::with_transport(self.clone(), config)
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.inner.state.lock().expect("mock state poisoned")
    }

    // ------------------------------------------------------------------
    // Scripting
    // ------------------------------------------------------------------

    /// Queue the reply for the next query frame
    pub fn reply(&self, reply: Reply) {
        self.state().replies.push_back(reply);
    }

    pub fn set_schema(&self, database: &str, schema: &str) {
        self.state()
            .schemas
            .insert(database.to_string(), schema.to_string());
    }

    /// Fail every call as if the server were unreachable
    pub fn set_offline(&self, offline: bool) {
        self.state().faults.offline = offline;
    }

    /// Answer the next transaction open with an error status
    pub fn fail_transaction_open(&self, status: Status) {
        self.state().faults.open_status = Some(status);
    }

    pub fn fail_commit(&self, status: Status) {
        self.state().faults.commit_status = Some(status);
    }

    /// Stamp every reply with a request id nobody sent
    pub fn answer_with_foreign_request_id(&self) {
        self.state().faults.foreign_req_id = true;
    }

    /// Report sessions as dead on pulse
    pub fn set_dead_pulses(&self, dead: bool) {
        self.state().faults.dead_pulses = dead;
    }

    /// Hold every session close call for `delay` before it is handled
    pub fn delay_session_close(&self, delay: Duration) {
        self.state().faults.close_delay = Some(delay);
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    pub fn events(&self) -> Vec<Event> {
        self.state().events.clone()
    }

    pub fn databases(&self) -> BTreeSet<String> {
        self.state().databases.clone()
    }

    /// Requests received on one transaction stream
    pub fn frames(&self, stream: usize) -> Vec<transaction::Req> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Frame { stream: s, req } if s == stream => Some(req),
                _ => None,
            })
            .collect()
    }

    /// Request kinds received on one transaction stream
    pub fn frame_kinds(&self, stream: usize) -> Vec<&'static str> {
        self.frames(stream).iter().map(frame_kind).collect()
    }

    /// Number of transaction streams started
    pub fn streams(&self) -> usize {
        self.inner.next_stream.load(Ordering::SeqCst)
    }

    pub fn is_stream_closed(&self, stream: usize) -> bool {
        self.events()
            .iter()
            .any(|e| matches!(e, Event::StreamClosed { stream: s } if *s == stream))
    }

    pub fn pulses(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Pulse { .. }))
            .count()
    }

    /// Sessions opened, in order, with their type
    pub fn opened_sessions(&self) -> Vec<(Vec<u8>, session::Type)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::SessionOpened {
                    session_id,
                    session_type,
                    ..
                } => Some((session_id, session_type)),
                _ => None,
            })
            .collect()
    }

    /// Close calls received for `session_id`
    pub fn close_calls(&self, session_id: &[u8]) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::SessionClosed { session_id: id } if id == session_id))
            .count()
    }

    /// Position of the first event matching `predicate`
    pub fn position(&self, predicate: impl Fn(&Event) -> bool) -> Option<usize> {
        self.events().iter().position(predicate)
    }

    /// Wait until `predicate` holds, yielding to server tasks in between
    pub async fn eventually(&self, predicate: impl Fn(&MockServer) -> bool) -> bool {
        for _ in 0..200 {
            if predicate(self) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        predicate(self)
    }

    fn record(&self, event: Event) {
        self.state().events.push(event);
    }

    fn check_online(&self) -> Result<(), Status> {
        if self.state().faults.offline {
            Err(Status::unavailable("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Transport for MockServer {
    async fn databases_all(
        &self,
        _req: core_database_manager::all::Req,
    ) -> Result<core_database_manager::all::Res, Status> {
        self.check_online()?;
        Ok(core_database_manager::all::Res {
            names: self.databases().into_iter().collect(),
        })
    }

    async fn databases_create(
        &self,
        req: core_database_manager::create::Req,
    ) -> Result<core_database_manager::create::Res, Status> {
        self.check_online()?;
        if !self.state().databases.insert(req.name.clone()) {
            return Err(Status::already_exists(format!(
                "database '{}' already exists",
                req.name
            )));
        }
        Ok(core_database_manager::create::Res {})
    }

    async fn databases_contains(
        &self,
        req: core_database_manager::contains::Req,
    ) -> Result<core_database_manager::contains::Res, Status> {
        self.check_online()?;
        Ok(core_database_manager::contains::Res {
            contains: self.state().databases.contains(&req.name),
        })
    }

    async fn database_schema(
        &self,
        req: core_database::schema::Req,
    ) -> Result<core_database::schema::Res, Status> {
        self.check_online()?;
        let state = self.state();
        if !state.databases.contains(&req.name) {
            return Err(Status::not_found(format!("database '{}' does not exist", req.name)));
        }
        Ok(core_database::schema::Res {
            schema: state.schemas.get(&req.name).cloned().unwrap_or_else(|| "define\n".to_string()),
        })
    }

    async fn session_open(&self, req: session::open::Req) -> Result<session::open::Res, Status> {
        self.check_online()?;
        if !self.state().databases.contains(&req.database) {
            return Err(Status::not_found(format!(
                "database '{}' does not exist",
                req.database
            )));
        }

        let session_id = self
            .inner
            .next_session
            .fetch_add(1, Ordering::SeqCst)
            .to_be_bytes()
            .to_vec();
        let session_type = req.r#type();

        let mut state = self.state();
        state
            .sessions
            .insert(session_id.clone(), (req.database.clone(), session_type));
        state.events.push(Event::SessionOpened {
            session_id: session_id.clone(),
            database: req.database,
            session_type,
        });

        Ok(session::open::Res {
            session_id,
            server_duration_millis: 1,
        })
    }

    async fn session_close(&self, req: session::close::Req) -> Result<session::close::Res, Status> {
        self.check_online()?;
        let delay = self.state().faults.close_delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let mut state = self.state();
        state.events.push(Event::SessionClosed {
            session_id: req.session_id.clone(),
        });
        match state.sessions.remove(&req.session_id) {
            Some(_) => Ok(session::close::Res {}),
            None => Err(Status::not_found("session does not exist")),
        }
    }

    async fn session_pulse(&self, req: session::pulse::Req) -> Result<session::pulse::Res, Status> {
        self.check_online()?;
        let mut state = self.state();
        let alive = !state.faults.dead_pulses && state.sessions.contains_key(&req.session_id);
        state.events.push(Event::Pulse {
            session_id: req.session_id,
        });
        Ok(session::pulse::Res { alive })
    }

    async fn transaction(&self, requests: OutboundFrames) -> Result<InboundFrames, Status> {
        self.check_online()?;
        let stream = self.inner.next_stream.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(serve_transaction(self.clone(), stream, requests, tx));

        Ok(UnboundedReceiverStream::new(rx).boxed())
    }
}

type Responses = mpsc::UnboundedSender<Result<transaction::Server, Status>>;

/// Per-stream server loop: one reply per request, until the client half-closes
async fn serve_transaction(
    server: MockServer,
    stream: usize,
    mut requests: OutboundFrames,
    tx: Responses,
) {
    let mut kind = QueryVariant::Match;
    let mut pages: VecDeque<Vec<ConceptMap>> = VecDeque::new();
    let mut hung_up = false;

    while let Some(client) = requests.next().await {
        for req in client.reqs {
            server.record(Event::Frame {
                stream,
                req: req.clone(),
            });
            if hung_up {
                continue;
            }

            let req_id = if server.state().faults.foreign_req_id {
                vec![0xee; 16]
            } else {
                req.req_id.clone()
            };

            match req.req {
                Some(transaction::req::Req::OpenReq(open)) => {
                    let failure = {
                        let mut state = server.state();
                        match state.faults.open_status.take() {
                            Some(status) => Some(status),
                            None if !state.sessions.contains_key(&open.session_id) => {
                                Some(Status::not_found("session does not exist"))
                            }
                            None => None,
                        }
                    };
                    match failure {
                        Some(status) => {
                            let _ = tx.send(Err(status));
                            hung_up = true;
                        }
                        None => send_res(&tx, req_id, transaction::res::Res::OpenRes(Default::default())),
                    }
                }
                Some(transaction::req::Req::QueryManagerReq(query)) => {
                    kind = QueryVariant::of(&query);
                    let reply = server
                        .state()
                        .replies
                        .pop_front()
                        .unwrap_or_else(|| kind.default_reply());

                    match reply {
                        Reply::Pages(scripted) => {
                            pages = scripted.into();
                            send_page(&tx, &req_id, kind, &mut pages);
                        }
                        Reply::Final => send_res(
                            &tx,
                            req_id,
                            transaction::res::Res::QueryManagerRes(kind.final_res()),
                        ),
                        Reply::Fail(status) => {
                            let _ = tx.send(Err(status));
                            hung_up = true;
                        }
                        Reply::Hangup => hung_up = true,
                    }
                }
                Some(transaction::req::Req::StreamReq(_)) => {
                    send_page(&tx, &req_id, kind, &mut pages);
                }
                Some(transaction::req::Req::CommitReq(_)) => {
                    let failure = server.state().faults.commit_status.take();
                    match failure {
                        Some(status) => {
                            let _ = tx.send(Err(status));
                            hung_up = true;
                        }
                        None => send_res(&tx, req_id, transaction::res::Res::CommitRes(Default::default())),
                    }
                }
                _ => {}
            }
        }
        if hung_up {
            break;
        }
    }

    // Ending the response stream is how the server hangs up
    drop(tx);
    // Drain the remaining requests so a half-close is still observed
    while let Some(client) = requests.next().await {
        for req in client.reqs {
            server.record(Event::Frame { stream, req });
        }
    }
    server.record(Event::StreamClosed { stream });
}

fn send_res(tx: &Responses, req_id: Vec<u8>, res: transaction::res::Res) {
    let _ = tx.send(Ok(transaction::Server {
        server: Some(transaction::server::Server::Res(transaction::Res {
            req_id,
            res: Some(res),
        })),
    }));
}

fn send_part(tx: &Responses, req_id: &[u8], res: transaction::res_part::Res) {
    let _ = tx.send(Ok(transaction::Server {
        server: Some(transaction::server::Server::ResPart(transaction::ResPart {
            req_id: req_id.to_vec(),
            res: Some(res),
        })),
    }));
}

/// Send the next page of answers followed by its continuation state
fn send_page(
    tx: &Responses,
    req_id: &[u8],
    kind: QueryVariant,
    pages: &mut VecDeque<Vec<ConceptMap>>,
) {
    if let Some(answers) = pages.pop_front() {
        send_part(
            tx,
            req_id,
            transaction::res_part::Res::QueryManagerResPart(kind.res_part(answers)),
        );
    }

    let state = if pages.is_empty() {
        transaction::stream::State::Done
    } else {
        transaction::stream::State::Continue
    };
    send_part(
        tx,
        req_id,
        transaction::res_part::Res::StreamResPart(transaction::stream::ResPart {
            state: state as i32,
        }),
    );
}

#[derive(Debug, Clone, Copy)]
enum QueryVariant {
    Define,
    Undefine,
    Match,
    Update,
    Delete,
    Insert,
}

impl QueryVariant {
    fn of(req: &query_manager::Req) -> Self {
        match req.req {
            Some(query_manager::req::Req::DefineReq(_)) => QueryVariant::Define,
            Some(query_manager::req::Req::UndefineReq(_)) => QueryVariant::Undefine,
            Some(query_manager::req::Req::UpdateReq(_)) => QueryVariant::Update,
            Some(query_manager::req::Req::DeleteReq(_)) => QueryVariant::Delete,
            Some(query_manager::req::Req::InsertReq(_)) => QueryVariant::Insert,
            Some(query_manager::req::Req::MatchReq(_)) | None => QueryVariant::Match,
        }
    }

    fn default_reply(self) -> Reply {
        match self {
            QueryVariant::Match | QueryVariant::Insert | QueryVariant::Update => {
                Reply::Pages(Vec::new())
            }
            QueryVariant::Define | QueryVariant::Undefine | QueryVariant::Delete => Reply::Final,
        }
    }

    fn res_part(self, answers: Vec<ConceptMap>) -> query_manager::ResPart {
        let res = match self {
            QueryVariant::Insert => {
                query_manager::res_part::Res::InsertResPart(query_manager::insert::ResPart { answers })
            }
            QueryVariant::Update => {
                query_manager::res_part::Res::UpdateResPart(query_manager::update::ResPart { answers })
            }
            _ => query_manager::res_part::Res::MatchResPart(query_manager::r#match::ResPart { answers }),
        };
        query_manager::ResPart { res: Some(res) }
    }

    fn final_res(self) -> query_manager::Res {
        let res = match self {
            QueryVariant::Define => query_manager::res::Res::DefineRes(Default::default()),
            QueryVariant::Undefine => query_manager::res::Res::UndefineRes(Default::default()),
            _ => query_manager::res::Res::DeleteRes(Default::default()),
        };
        query_manager::Res { res: Some(res) }
    }
}

/// Short name of one transaction request
pub fn frame_kind(req: &transaction::Req) -> &'static str {
    match req.req {
        Some(transaction::req::Req::OpenReq(_)) => "open",
        Some(transaction::req::Req::StreamReq(_)) => "stream",
        Some(transaction::req::Req::CommitReq(_)) => "commit",
        Some(transaction::req::Req::RollbackReq(_)) => "rollback",
        Some(transaction::req::Req::QueryManagerReq(_)) => "query",
        None => "empty",
    }
}

// ============================================================================
// Answer builders
// ============================================================================

pub fn type_of(label: &str, encoding: r#type::Encoding) -> Type {
    Type {
        label: label.to_string(),
        encoding: encoding as i32,
        ..Default::default()
    }
}

/// An entity instance of `label`
pub fn entity(label: &str, iid: u8) -> Concept {
    Concept {
        concept: Some(concept::Concept::Thing(Thing {
            iid: vec![0x80, iid],
            r#type: Some(type_of(label, r#type::Encoding::EntityType)),
            value: None,
            inferred: false,
        })),
    }
}

/// A string attribute instance of `label`
pub fn string_attribute(label: &str, value: &str) -> Concept {
    Concept {
        concept: Some(concept::Concept::Thing(Thing {
            iid: value.as_bytes().to_vec(),
            r#type: Some(Type {
                value_type: tdb_proto::attribute_type::ValueType::String as i32,
                ..type_of(label, r#type::Encoding::AttributeType)
            }),
            value: Some(attribute::Value {
                value: Some(attribute::value::Value::String(value.to_string())),
            }),
            inferred: false,
        })),
    }
}

/// A type concept
pub fn type_concept(label: &str, encoding: r#type::Encoding) -> Concept {
    Concept {
        concept: Some(concept::Concept::Type(type_of(label, encoding))),
    }
}

/// A result record binding each variable to a concept
pub fn answer<'a>(bindings: impl IntoIterator<Item = (&'a str, Concept)>) -> ConceptMap {
    ConceptMap {
        map: bindings
            .into_iter()
            .map(|(var, concept)| (var.to_string(), concept))
            .collect(),
    }
}

/// `count` records binding `x` to entities of `label`
pub fn entities(label: &str, count: u8) -> Vec<ConceptMap> {
    (0..count).map(|i| answer([("x", entity(label, i))])).collect()
}

/// Collapse events to a readable trace, one string per event
pub fn trace(events: &[Event]) -> Vec<String> {
    let mut names: BTreeMap<Vec<u8>, usize> = BTreeMap::new();
    let mut name_of = |id: &[u8]| {
        let next = names.len();
        *names.entry(id.to_vec()).or_insert(next)
    };

    events
        .iter()
        .map(|event| match event {
            Event::SessionOpened {
                session_id,
                session_type,
                ..
            } => format!("session_open s{} {}", name_of(session_id), session_type.as_str_name()),
            Event::SessionClosed { session_id } => format!("session_close s{}", name_of(session_id)),
            Event::Pulse { session_id } => format!("pulse s{}", name_of(session_id)),
            Event::Frame { stream, req } => format!("t{} {}", stream, frame_kind(req)),
            Event::StreamClosed { stream } => format!("t{} closed", stream),
        })
        .collect()
}
