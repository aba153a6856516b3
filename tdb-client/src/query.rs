//! Query dispatch and lazy result delivery
//!
//! [`QueryKind`] decides the transaction type, the session type and whether a
//! commit is needed. [`QueryAnswers`] drives one transaction through
//! open, query, continuation, commit and close as the caller pulls results.

use crate::answer::{self, Step};
use crate::concept::ConceptMap;
use crate::convert::proto_concept_map;
use crate::error::{ClientError, Result};
use crate::frame::{QueryOptions, TransactionType};
use crate::session::{close_session, open_session, SessionId, SessionType};
use crate::stream::TransactionStream;
use crate::transport::Transport;
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use tdb_proto as proto;
use tracing::{debug, warn};

/// Logical query operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Define,
    Undefine,
    Match,
    Update,
    Delete,
    Insert,
}

impl QueryKind {
    pub const ALL: [QueryKind; 6] = [
        QueryKind::Define,
        QueryKind::Undefine,
        QueryKind::Match,
        QueryKind::Update,
        QueryKind::Delete,
        QueryKind::Insert,
    ];

    pub fn transaction_type(self) -> TransactionType {
        match self {
            QueryKind::Match => TransactionType::Read,
            _ => TransactionType::Write,
        }
    }

    /// Schema changes run in a temporary schema session
    pub fn session_type(self) -> SessionType {
        match self {
            QueryKind::Define | QueryKind::Undefine => SessionType::Schema,
            _ => SessionType::Data,
        }
    }

    pub fn requires_commit(self) -> bool {
        self.transaction_type() == TransactionType::Write
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::Define => "define",
            QueryKind::Undefine => "undefine",
            QueryKind::Match => "match",
            QueryKind::Update => "update",
            QueryKind::Delete => "delete",
            QueryKind::Insert => "insert",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryKind {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        QueryKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| ClientError::InvalidArgument(format!("unknown query kind: {}", s)))
    }
}

/// Progress of one query transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    /// Nothing sent yet; the transaction opens on the first advance
    AwaitingOpen,
    Streaming,
    /// Results exhausted; commit (if needed) and close remain
    AwaitingCommit,
    Closed,
}

/// Lazy sequence of result records for one query
///
/// Nothing is sent to the server until the first call to [`next`](Self::next).
/// Dropping the sequence before it is exhausted closes the transaction
/// without committing.
pub struct QueryAnswers<T: Transport> {
    transport: T,
    kind: QueryKind,
    query: String,
    database: String,
    data_session: SessionId,
    options: QueryOptions,
    buffer: usize,
    state: AnswerState,
    stream: Option<TransactionStream>,
    schema_session: Option<SessionId>,
    pending: VecDeque<proto::ConceptMap>,
}

impl<T: Transport> QueryAnswers<T> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        transport: T,
        kind: QueryKind,
        query: impl Into<String>,
        database: impl Into<String>,
        data_session: SessionId,
        options: QueryOptions,
        buffer: usize,
    ) -> Self {
        Self {
            transport,
            kind,
            query: query.into(),
            database: database.into(),
            data_session,
            options,
            buffer,
            state: AnswerState::AwaitingOpen,
            stream: None,
            schema_session: None,
            pending: VecDeque::new(),
        }
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn state(&self) -> AnswerState {
        self.state
    }

    /// Advance to the next record; `Ok(None)` once the transaction is complete
    ///
    /// After an error the transaction has been released and further calls
    /// return `Ok(None)`.
    pub async fn next(&mut self) -> Result<Option<ConceptMap>> {
        loop {
            if let Some(answer) = self.pending.pop_front() {
                return match proto_concept_map(answer) {
                    Ok(record) => Ok(Some(record)),
                    Err(e) => Err(self.fail(e).await),
                };
            }

            let step = match self.state {
                AnswerState::AwaitingOpen => self.start().await,
                AnswerState::Streaming => self.advance().await,
                AnswerState::AwaitingCommit => self.finish().await,
                AnswerState::Closed => return Ok(None),
            };

            if let Err(e) = step {
                return Err(self.fail(e).await);
            }
        }
    }

    /// Drain every record, committing write queries
    pub async fn collect(mut self) -> Result<Vec<ConceptMap>> {
        let mut records = Vec::new();
        while let Some(record) = self.next().await? {
            records.push(record);
        }
        Ok(records)
    }

    /// Adapt into a `futures::Stream` of records
    pub fn into_stream(self) -> impl Stream<Item = Result<ConceptMap>> {
        stream::unfold(self, |mut answers| async move {
            match answers.next().await {
                Ok(Some(record)) => Some((Ok(record), answers)),
                Ok(None) => None,
                Err(e) => Some((Err(e), answers)),
            }
        })
    }

    async fn start(&mut self) -> Result<()> {
        let session_id = match self.kind.session_type() {
            SessionType::Data => self.data_session.clone(),
            SessionType::Schema => {
                let session =
                    open_session(&self.transport, &self.database, SessionType::Schema).await?;
                let id = session.id().clone();
                self.schema_session = Some(id.clone());
                id
            }
        };

        let stream = TransactionStream::open(
            &self.transport,
            &session_id,
            self.kind.transaction_type(),
            self.buffer,
        )
        .await?;

        debug!(
            request_id = %stream.request_id(),
            query_kind = %self.kind,
            database = %self.database,
            "Executing query"
        );

        let stream = self.stream.insert(stream);
        stream.query(self.kind, &self.query, self.options).await?;
        self.state = AnswerState::Streaming;
        Ok(())
    }

    async fn advance(&mut self) -> Result<()> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| ClientError::ProtocolError("transaction is not open".to_string()))?;

        let frame = stream.receive().await?.ok_or_else(|| {
            ClientError::ProtocolError("stream ended before the query completed".to_string())
        })?;

        match answer::classify(frame) {
            Step::Answers(answers) => self.pending.extend(answers),
            Step::Continue => stream.request_more().await?,
            Step::Done => self.state = AnswerState::AwaitingCommit,
            Step::Skip => {}
        }
        Ok(())
    }

    async fn finish(&mut self) -> Result<()> {
        if self.kind.requires_commit() {
            let stream = self
                .stream
                .as_mut()
                .ok_or_else(|| ClientError::ProtocolError("transaction is not open".to_string()))?;
            stream.commit().await?;
        }

        self.state = AnswerState::Closed;
        self.release().await
    }

    /// Close the stream, then any temporary schema session
    async fn release(&mut self) -> Result<()> {
        if let Some(mut stream) = self.stream.take() {
            stream.close();
        }
        // The id stays recorded until the close completes, so a cancelled
        // `next()` leaves it for `Drop` to close.
        if let Some(id) = self.schema_session.clone() {
            let closed = close_session(&self.transport, &id).await;
            self.schema_session = None;
            closed?;
        }
        Ok(())
    }

    async fn fail(&mut self, error: ClientError) -> ClientError {
        self.state = AnswerState::Closed;
        self.pending.clear();

        if let Err(e) = self.release().await {
            warn!(query_kind = %self.kind, error = %e, "Failed to release query resources");
        }
        error
    }
}

impl<T: Transport> Drop for QueryAnswers<T> {
    fn drop(&mut self) {
        let stream = self.stream.take();
        let schema_session = self.schema_session.take();
        if stream.is_none() && schema_session.is_none() {
            return;
        }

        warn!(
            query_kind = %self.kind,
            state = ?self.state,
            "Query abandoned before completion; closing without commit"
        );

        if let Some(mut stream) = stream {
            stream.close();
        }

        if let Some(id) = schema_session {
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    let transport = self.transport.clone();
                    handle.spawn(async move {
                        if let Err(e) = close_session(&transport, &id).await {
                            warn!(session_id = %id, error = %e, "Failed to close schema session");
                        }
                    });
                }
                Err(_) => warn!(session_id = %id, "No runtime available to close schema session"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_table() {
        use QueryKind::*;

        assert_eq!(Match.transaction_type(), TransactionType::Read);
        assert!(!Match.requires_commit());
        assert_eq!(Match.session_type(), SessionType::Data);

        for kind in [Insert, Update, Delete] {
            assert_eq!(kind.transaction_type(), TransactionType::Write);
            assert_eq!(kind.session_type(), SessionType::Data);
            assert!(kind.requires_commit());
        }

        for kind in [Define, Undefine] {
            assert_eq!(kind.transaction_type(), TransactionType::Write);
            assert_eq!(kind.session_type(), SessionType::Schema);
            assert!(kind.requires_commit());
        }
    }

    #[test]
    fn test_parse_query_kind() {
        assert_eq!("match".parse::<QueryKind>().unwrap(), QueryKind::Match);
        assert_eq!(" INSERT ".parse::<QueryKind>().unwrap(), QueryKind::Insert);
        for kind in QueryKind::ALL {
            assert_eq!(kind.to_string().parse::<QueryKind>().unwrap(), kind);
        }

        let err = "select".parse::<QueryKind>().unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }
}
