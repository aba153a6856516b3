//! Outbound transaction frames
//!
//! Every frame is built fresh per call and carries exactly one request.

use crate::query::QueryKind;
use crate::session::SessionId;
use std::fmt;
use tdb_proto::{query_manager, transaction, Options};
use uuid::Uuid;

/// Identifier correlating all frames of one transaction
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }

    /// True if `bytes` is this identifier's wire form
    pub fn matches(&self, bytes: &[u8]) -> bool {
        self.as_bytes() == bytes
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl fmt::Debug for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestId({})", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Read,
    Write,
}

impl From<TransactionType> for transaction::Type {
    fn from(transaction_type: TransactionType) -> Self {
        match transaction_type {
            TransactionType::Read => transaction::Type::Read,
            TransactionType::Write => transaction::Type::Write,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(transaction::Type::from(*self).as_str_name())
    }
}

/// Execution options attached to a query frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub parallel: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl From<QueryOptions> for Options {
    fn from(options: QueryOptions) -> Self {
        Options {
            parallel: Some(options.parallel),
            ..Default::default()
        }
    }
}

fn single(request_id: &RequestId, req: transaction::req::Req) -> transaction::Client {
    transaction::Client {
        reqs: vec![transaction::Req {
            req_id: request_id.to_vec(),
            metadata: Default::default(),
            req: Some(req),
        }],
    }
}

pub(crate) fn open(
    request_id: &RequestId,
    session_id: &SessionId,
    transaction_type: TransactionType,
) -> transaction::Client {
    single(
        request_id,
        transaction::req::Req::OpenReq(transaction::open::Req {
            session_id: session_id.to_vec(),
            r#type: transaction::Type::from(transaction_type) as i32,
            options: None,
            network_latency_millis: 0,
        }),
    )
}

pub(crate) fn query(
    request_id: &RequestId,
    kind: QueryKind,
    text: &str,
    options: QueryOptions,
) -> transaction::Client {
    let query = text.to_string();
    let req = match kind {
        QueryKind::Match => query_manager::req::Req::MatchReq(query_manager::r#match::Req { query }),
        QueryKind::Define => query_manager::req::Req::DefineReq(query_manager::define::Req { query }),
        QueryKind::Undefine => {
            query_manager::req::Req::UndefineReq(query_manager::undefine::Req { query })
        }
        QueryKind::Update => query_manager::req::Req::UpdateReq(query_manager::update::Req { query }),
        QueryKind::Delete => query_manager::req::Req::DeleteReq(query_manager::delete::Req { query }),
        QueryKind::Insert => query_manager::req::Req::InsertReq(query_manager::insert::Req { query }),
    };

    single(
        request_id,
        transaction::req::Req::QueryManagerReq(query_manager::Req {
            options: Some(options.into()),
            req: Some(req),
        }),
    )
}

pub(crate) fn stream_continue(request_id: &RequestId) -> transaction::Client {
    single(request_id, transaction::req::Req::StreamReq(transaction::stream::Req {}))
}

pub(crate) fn commit(request_id: &RequestId) -> transaction::Client {
    single(request_id, transaction::req::Req::CommitReq(transaction::commit::Req {}))
}

/// Short name of an outbound frame, for logs
pub(crate) fn describe(frame: &transaction::Client) -> &'static str {
    match frame.reqs.first().and_then(|r| r.req.as_ref()) {
        Some(transaction::req::Req::OpenReq(_)) => "open",
        Some(transaction::req::Req::StreamReq(_)) => "stream",
        Some(transaction::req::Req::CommitReq(_)) => "commit",
        Some(transaction::req::Req::RollbackReq(_)) => "rollback",
        Some(transaction::req::Req::QueryManagerReq(_)) => "query",
        None => "empty",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_bytes().len(), 16);
        assert!(a.matches(&a.to_vec()));
        assert!(!a.matches(b.as_bytes()));
    }

    #[test]
    fn test_every_frame_carries_the_request_id() {
        let id = RequestId::generate();
        let session = SessionId::new(vec![1, 2, 3]);

        let frames = [
            open(&id, &session, TransactionType::Write),
            query(&id, QueryKind::Insert, "insert $x isa animal;", QueryOptions::default()),
            stream_continue(&id),
            commit(&id),
        ];

        for frame in &frames {
            assert_eq!(frame.reqs.len(), 1);
            assert_eq!(frame.reqs[0].req_id, id.to_vec());
        }
        assert_eq!(
            frames.iter().map(describe).collect::<Vec<_>>(),
            vec!["open", "query", "stream", "commit"]
        );
    }

    #[test]
    fn test_open_frame_fields() {
        let id = RequestId::generate();
        let session = SessionId::new(vec![9, 9]);

        let frame = open(&id, &session, TransactionType::Read);
        match frame.reqs[0].req.as_ref() {
            Some(transaction::req::Req::OpenReq(open)) => {
                assert_eq!(open.session_id, vec![9, 9]);
                assert_eq!(open.r#type(), transaction::Type::Read);
            }
            other => panic!("expected open request, got {:?}", other),
        }
    }

    #[test]
    fn test_query_frame_variant_and_options() {
        let id = RequestId::generate();
        let cases = [
            (QueryKind::Match, "match"),
            (QueryKind::Define, "define"),
            (QueryKind::Undefine, "undefine"),
            (QueryKind::Update, "update"),
            (QueryKind::Delete, "delete"),
            (QueryKind::Insert, "insert"),
        ];

        for (kind, text) in cases {
            let frame = query(&id, kind, text, QueryOptions { parallel: true });
            let Some(transaction::req::Req::QueryManagerReq(req)) = frame.reqs[0].req.as_ref() else {
                panic!("expected query manager request");
            };
            assert_eq!(req.options.as_ref().and_then(|o| o.parallel), Some(true));

            let (variant, query_text) = match req.req.as_ref().unwrap() {
                query_manager::req::Req::MatchReq(r) => ("match", &r.query),
                query_manager::req::Req::DefineReq(r) => ("define", &r.query),
                query_manager::req::Req::UndefineReq(r) => ("undefine", &r.query),
                query_manager::req::Req::UpdateReq(r) => ("update", &r.query),
                query_manager::req::Req::DeleteReq(r) => ("delete", &r.query),
                query_manager::req::Req::InsertReq(r) => ("insert", &r.query),
            };
            assert_eq!(variant, text);
            assert_eq!(query_text, text);
        }
    }
}
