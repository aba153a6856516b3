//! Transaction stream controller
//!
//! One [`TransactionStream`] owns one bidirectional `transaction` call for the
//! lifetime of a single transaction. Every outbound frame is stamped with the
//! stream's [`RequestId`]; every inbound frame must echo it.

use crate::error::{ClientError, Result};
use crate::frame::{self, QueryOptions, RequestId, TransactionType};
use crate::query::QueryKind;
use crate::session::SessionId;
use crate::transport::{InboundFrames, Transport};
use futures::StreamExt;
use tdb_proto::transaction;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::Status;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    Opened,
    Committed,
    Closed,
}

pub struct TransactionStream {
    request_id: RequestId,
    transaction_type: TransactionType,
    sender: Option<mpsc::Sender<transaction::Client>>,
    receiver: Option<InboundFrames>,
    state: StreamState,
}

impl TransactionStream {
    /// Establish the stream and wait for the open acknowledgment
    ///
    /// The Open frame is queued before the call starts so the server sees it
    /// together with the request headers. If the acknowledgment is missing or
    /// malformed the stream is closed before the error is returned.
    pub async fn open<T: Transport>(
        transport: &T,
        session_id: &SessionId,
        transaction_type: TransactionType,
        buffer: usize,
    ) -> Result<Self> {
        let request_id = RequestId::generate();
        let (sender, requests) = mpsc::channel(buffer.max(1));

        sender
            .send(frame::open(&request_id, session_id, transaction_type))
            .await
            .map_err(|_| ClientError::ConnectionError("transaction stream closed".to_string()))?;

        debug!(
            request_id = %request_id,
            session_id = %session_id,
            transaction_type = %transaction_type,
            "Opening transaction"
        );

        let inbound = transport
            .transaction(ReceiverStream::new(requests))
            .await
            .map_err(ClientError::protocol)?;

        let mut stream = Self {
            request_id,
            transaction_type,
            sender: Some(sender),
            receiver: Some(inbound),
            state: StreamState::Opened,
        };

        if let Err(e) = stream.await_open_ack().await {
            stream.close();
            return Err(e);
        }

        Ok(stream)
    }

    async fn await_open_ack(&mut self) -> Result<()> {
        let frame = self.next_frame(ClientError::protocol).await?.ok_or_else(|| {
            ClientError::ProtocolError(
                "stream ended before the transaction open was acknowledged".to_string(),
            )
        })?;

        match frame.server {
            Some(transaction::server::Server::Res(transaction::Res {
                res: Some(transaction::res::Res::OpenRes(_)),
                ..
            })) => {
                trace!(request_id = %self.request_id, "Transaction open acknowledged");
                Ok(())
            }
            other => Err(ClientError::ProtocolError(format!(
                "expected open acknowledgment, got {}",
                describe_inbound(other.as_ref())
            ))),
        }
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == StreamState::Closed
    }

    /// Write one outbound frame
    pub async fn send(&mut self, frame: transaction::Client) -> Result<()> {
        let sender = match (&self.sender, self.state) {
            (Some(sender), StreamState::Opened) => sender,
            _ => {
                return Err(ClientError::ProtocolError(format!(
                    "cannot send a {} frame on a {:?} transaction",
                    frame::describe(&frame),
                    self.state
                )))
            }
        };

        trace!(request_id = %self.request_id, frame = frame::describe(&frame), "Sending frame");

        sender
            .send(frame)
            .await
            .map_err(|_| ClientError::ConnectionError("transaction stream closed".to_string()))
    }

    /// Send the single query frame of this transaction
    pub async fn query(&mut self, kind: QueryKind, text: &str, options: QueryOptions) -> Result<()> {
        let frame = frame::query(&self.request_id, kind, text, options);
        self.send(frame).await
    }

    /// Ask the server for the next page of results
    pub async fn request_more(&mut self) -> Result<()> {
        let frame = frame::stream_continue(&self.request_id);
        self.send(frame).await
    }

    /// Wait for the next inbound frame; `None` when the server ended the stream
    pub async fn receive(&mut self) -> Result<Option<transaction::Server>> {
        self.next_frame(ClientError::query).await
    }

    async fn next_frame(
        &mut self,
        on_status: fn(Status) -> ClientError,
    ) -> Result<Option<transaction::Server>> {
        let receiver = self.receiver.as_mut().ok_or_else(|| {
            ClientError::ProtocolError("cannot receive on a closed transaction".to_string())
        })?;

        match receiver.next().await {
            None => Ok(None),
            Some(Err(status)) => Err(on_status(status)),
            Some(Ok(frame)) => {
                self.check_request_id(&frame)?;
                Ok(Some(frame))
            }
        }
    }

    fn check_request_id(&self, frame: &transaction::Server) -> Result<()> {
        let req_id = match frame.server.as_ref() {
            Some(transaction::server::Server::Res(res)) => &res.req_id,
            Some(transaction::server::Server::ResPart(part)) => &part.req_id,
            None => return Err(ClientError::ProtocolError("received an empty frame".to_string())),
        };

        if self.request_id.matches(req_id) {
            Ok(())
        } else {
            Err(ClientError::ProtocolError(format!(
                "frame for another transaction received on {}",
                self.request_id
            )))
        }
    }

    /// Commit a write transaction and wait for the acknowledgment
    pub async fn commit(&mut self) -> Result<()> {
        if self.transaction_type != TransactionType::Write {
            return Err(ClientError::ProtocolError(
                "only write transactions can be committed".to_string(),
            ));
        }
        if self.state != StreamState::Opened {
            return Err(ClientError::ProtocolError(format!(
                "cannot commit a {:?} transaction",
                self.state
            )));
        }

        let frame = frame::commit(&self.request_id);
        self.send(frame).await?;
        self.state = StreamState::Committed;

        let ack = self.next_frame(ClientError::query).await?.ok_or_else(|| {
            ClientError::ProtocolError("stream ended before the commit was acknowledged".to_string())
        })?;

        match ack.server {
            Some(transaction::server::Server::Res(transaction::Res {
                res: Some(transaction::res::Res::CommitRes(_)),
                ..
            })) => {
                debug!(request_id = %self.request_id, "Transaction committed");
                Ok(())
            }
            other => Err(ClientError::ProtocolError(format!(
                "expected commit acknowledgment, got {}",
                describe_inbound(other.as_ref())
            ))),
        }
    }

    /// Half-close the outbound side, then release the inbound side
    ///
    /// Repeated calls are no-ops.
    pub fn close(&mut self) {
        if self.state == StreamState::Closed {
            return;
        }

        drop(self.sender.take());
        drop(self.receiver.take());
        self.state = StreamState::Closed;

        debug!(request_id = %self.request_id, "Transaction closed");
    }
}

impl Drop for TransactionStream {
    fn drop(&mut self) {
        self.close();
    }
}

fn describe_inbound(frame: Option<&transaction::server::Server>) -> &'static str {
    match frame {
        Some(transaction::server::Server::Res(res)) => match res.res {
            Some(transaction::res::Res::OpenRes(_)) => "open response",
            Some(transaction::res::Res::CommitRes(_)) => "commit response",
            Some(transaction::res::Res::RollbackRes(_)) => "rollback response",
            Some(transaction::res::Res::QueryManagerRes(_)) => "query response",
            None => "empty response",
        },
        Some(transaction::server::Server::ResPart(_)) => "response part",
        None => "empty frame",
    }
}
