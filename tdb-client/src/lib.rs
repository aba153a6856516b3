/// Graph database gRPC client library
///
/// This crate drives the session and transaction protocol of a remote graph
/// database server: session keep-alive, one bidirectional stream per
/// transaction, paginated result delivery and commit.

pub mod error;
pub mod config;
pub mod transport;
pub mod session;
pub mod frame;
pub mod stream;
pub mod query;
pub mod concept;
pub mod convert;
pub mod client;
mod answer;

// Re-export key types
pub use client::Client;
pub use concept::{Concept, ConceptMap, Encoding, Thing, Type, Value, ValueType};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use frame::{QueryOptions, RequestId, TransactionType};
pub use query::{AnswerState, QueryAnswers, QueryKind};
pub use session::{Heartbeat, Session, SessionId, SessionManager, SessionType};
pub use stream::{StreamState, TransactionStream};
pub use transport::{GrpcTransport, InboundFrames, OutboundFrames, Transport};
