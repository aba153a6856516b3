//! Error types for the graph database client
use thiserror::Error;
use tonic::{Code, Status};

#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport unreachable or broken mid-stream.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Server rejected a session open, close or pulse.
    #[error("Session error: {0}")]
    SessionError(String),

    /// An inbound frame violated the expected transaction sequence.
    #[error("Protocol error: {0}")]
    ProtocolError(String),

    /// Server reported a query-execution failure.
    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Server rejected a database-management call.
    #[error("Server error: {0}")]
    ServerError(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Returns a stable error code for this error variant.
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::ConnectionError(_) => "CONNECTION_ERROR",
            ClientError::SessionError(_) => "SESSION_ERROR",
            ClientError::ProtocolError(_) => "PROTOCOL_ERROR",
            ClientError::QueryError(_) => "QUERY_ERROR",
            ClientError::InvalidArgument(_) => "INVALID_ARGUMENT",
            ClientError::ServerError(_) => "SERVER_ERROR",
        }
    }

    /// True when the failure came from the transport rather than the server.
    pub fn is_connection(&self) -> bool {
        matches!(self, ClientError::ConnectionError(_))
    }

    /// Classify a status returned by a session call.
    pub(crate) fn session(status: Status) -> Self {
        Self::classify(status, ClientError::SessionError)
    }

    /// Classify a status returned while opening or acknowledging a transaction.
    pub(crate) fn protocol(status: Status) -> Self {
        Self::classify(status, ClientError::ProtocolError)
    }

    /// Classify a status returned while a query or commit is in flight.
    pub(crate) fn query(status: Status) -> Self {
        Self::classify(status, ClientError::QueryError)
    }

    fn classify(status: Status, server_side: fn(String) -> ClientError) -> Self {
        if is_transport_failure(&status) {
            ClientError::ConnectionError(status.message().to_string())
        } else {
            server_side(status.message().to_string())
        }
    }
}

fn is_transport_failure(status: &Status) -> bool {
    matches!(
        status.code(),
        Code::Unavailable | Code::DeadlineExceeded | Code::Cancelled | Code::Unknown
    )
}

/// Convert gRPC Status from a database-management call to ClientError
impl From<Status> for ClientError {
    fn from(status: Status) -> Self {
        Self::classify(status, ClientError::ServerError)
    }
}

impl From<tonic::transport::Error> for ClientError {
    fn from(err: tonic::transport::Error) -> Self {
        ClientError::ConnectionError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClientError::ConnectionError("x".into()).code(), "CONNECTION_ERROR");
        assert_eq!(ClientError::SessionError("x".into()).code(), "SESSION_ERROR");
        assert_eq!(ClientError::ProtocolError("x".into()).code(), "PROTOCOL_ERROR");
        assert_eq!(ClientError::QueryError("x".into()).code(), "QUERY_ERROR");
        assert_eq!(ClientError::InvalidArgument("x".into()).code(), "INVALID_ARGUMENT");
        assert_eq!(ClientError::ServerError("x".into()).code(), "SERVER_ERROR");
    }

    #[test]
    fn test_transport_statuses_are_connection_errors() {
        for status in [
            Status::unavailable("down"),
            Status::deadline_exceeded("slow"),
            Status::cancelled("gone"),
        ] {
            assert!(ClientError::session(status.clone()).is_connection());
            assert!(ClientError::query(status.clone()).is_connection());
            assert!(ClientError::from(status).is_connection());
        }
    }

    #[test]
    fn test_server_statuses_follow_context() {
        let status = Status::invalid_argument("[TYR03] invalid query");

        assert!(matches!(
            ClientError::session(status.clone()),
            ClientError::SessionError(msg) if msg.contains("TYR03")
        ));
        assert!(matches!(ClientError::protocol(status.clone()), ClientError::ProtocolError(_)));
        assert!(matches!(ClientError::query(status.clone()), ClientError::QueryError(_)));
        assert!(matches!(ClientError::from(status), ClientError::ServerError(_)));
    }
}
