//! Session lifecycle and keep-alive heartbeat
//!
//! A [`SessionManager`] tracks at most one open session. Opening a session
//! arms a background pulse task scoped to that session; closing it (or
//! opening another database) disarms the task before the close call is sent.

use crate::error::{ClientError, Result};
use crate::transport::Transport;
use bytes::Bytes;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tdb_proto::session as proto;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace, warn};

/// Opaque session identifier issued by the server
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionId(Bytes);

impl SessionId {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self)
    }
}

/// Kind of session: data reads/writes, or schema changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionType {
    Data,
    Schema,
}

impl From<SessionType> for proto::Type {
    fn from(session_type: SessionType) -> Self {
        match session_type {
            SessionType::Data => proto::Type::Data,
            SessionType::Schema => proto::Type::Schema,
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionType::Data => write!(f, "data"),
            SessionType::Schema => write!(f, "schema"),
        }
    }
}

/// A session opened against one database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    database: String,
    session_type: SessionType,
}

impl Session {
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }
}

/// Issue a session-open call.
pub(crate) async fn open_session<T: Transport>(
    transport: &T,
    database: &str,
    session_type: SessionType,
) -> Result<Session> {
    if database.trim().is_empty() {
        return Err(ClientError::InvalidArgument(
            "database name must not be empty".to_string(),
        ));
    }

    let request = proto::open::Req {
        database: database.to_string(),
        r#type: proto::Type::from(session_type) as i32,
        options: None,
    };

    let response = transport
        .session_open(request)
        .await
        .map_err(ClientError::session)?;

    let session = Session {
        id: SessionId::new(response.session_id),
        database: database.to_string(),
        session_type,
    };

    info!(
        database = %session.database,
        session_id = %session.id,
        session_type = %session_type,
        server_duration_millis = response.server_duration_millis,
        "Session opened"
    );

    Ok(session)
}

/// Issue a session-close call.
pub(crate) async fn close_session<T: Transport>(transport: &T, id: &SessionId) -> Result<()> {
    transport
        .session_close(proto::close::Req {
            session_id: id.to_vec(),
        })
        .await
        .map_err(ClientError::session)?;

    info!(session_id = %id, "Session closed");
    Ok(())
}

/// Background task pulsing one session at a fixed interval
///
/// The task is aborted when the heartbeat is dropped.
pub struct Heartbeat {
    handle: JoinHandle<()>,
    pulses: Arc<AtomicU64>,
}

impl Heartbeat {
    /// Arm the heartbeat; the first pulse is sent immediately.
    pub(crate) fn start<T: Transport>(transport: T, session_id: SessionId, interval: Duration) -> Self {
        let pulses = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&pulses);

        debug!(session_id = %session_id, interval_ms = interval.as_millis() as u64, "Arming heartbeat");

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let request = proto::pulse::Req {
                    session_id: session_id.to_vec(),
                };
                counter.fetch_add(1, Ordering::Relaxed);

                // A dead session is only diagnostic here; the next transaction open fails.
                match transport.session_pulse(request).await {
                    Ok(res) if res.alive => trace!(session_id = %session_id, "Session pulse"),
                    Ok(_) => warn!(session_id = %session_id, "Server reports session is no longer alive"),
                    Err(status) => {
                        warn!(session_id = %session_id, error = %status.message(), "Session pulse failed")
                    }
                }
            }
        });

        Self { handle, pulses }
    }

    /// Number of pulses sent so far
    pub fn pulses_sent(&self) -> u64 {
        self.pulses.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for Heartbeat {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[derive(Default)]
struct SessionState {
    /// Last opened session; kept after close so a repeated close reaches the server.
    current: Option<Session>,
    /// Present iff `current` is open.
    heartbeat: Option<Heartbeat>,
}

/// Owns the long-lived data session and its heartbeat
pub struct SessionManager<T: Transport> {
    transport: T,
    pulse_interval: Duration,
    state: Mutex<SessionState>,
}

impl<T: Transport> SessionManager<T> {
    pub fn new(transport: T, pulse_interval: Duration) -> Self {
        Self {
            transport,
            pulse_interval,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Open a session and arm the heartbeat
    ///
    /// A session that is still open is closed first. A failure to close it is
    /// logged and does not prevent the new session from opening.
    pub async fn open(&self, database: &str, session_type: SessionType) -> Result<SessionId> {
        if self.pulse_interval.is_zero() {
            return Err(ClientError::InvalidArgument(
                "pulse interval must be non-zero".to_string(),
            ));
        }

        let mut state = self.state.lock().await;

        if let Some(heartbeat) = state.heartbeat.take() {
            drop(heartbeat);
            if let Some(previous) = state.current.as_ref() {
                debug!(
                    database = %previous.database,
                    session_id = %previous.id,
                    "Closing previous session before reopening"
                );
                if let Err(e) = close_session(&self.transport, &previous.id).await {
                    warn!(session_id = %previous.id, error = %e, "Failed to close previous session");
                }
            }
            // A failed open below must not leave the old database selected
            state.current = None;
        }

        let session = open_session(&self.transport, database, session_type).await?;
        let id = session.id.clone();

        state.heartbeat = Some(Heartbeat::start(
            self.transport.clone(),
            id.clone(),
            self.pulse_interval,
        ));
        state.current = Some(session);

        Ok(id)
    }

    /// Disarm the heartbeat and close the recorded session
    ///
    /// Closing twice sends two close calls; the server's rejection of the
    /// second one is returned as a `SessionError`.
    pub async fn close(&self) -> Result<()> {
        let mut state = self.state.lock().await;

        drop(state.heartbeat.take());

        let session = state
            .current
            .as_ref()
            .ok_or_else(|| ClientError::SessionError("no session has been opened".to_string()))?;

        close_session(&self.transport, &session.id).await
    }

    /// The currently open session, if any
    pub async fn active(&self) -> Option<Session> {
        let state = self.state.lock().await;
        if state.heartbeat.is_some() {
            state.current.clone()
        } else {
            None
        }
    }

    /// Name of the most recently opened database
    pub async fn current_database(&self) -> Option<String> {
        let state = self.state.lock().await;
        state.current.as_ref().map(|s| s.database.clone())
    }

    /// True while a session is open and its heartbeat armed
    pub async fn is_pulsing(&self) -> bool {
        let state = self.state.lock().await;
        state.heartbeat.as_ref().map(Heartbeat::is_running).unwrap_or(false)
    }

    /// Pulses sent for the currently open session
    pub async fn pulses_sent(&self) -> u64 {
        let state = self.state.lock().await;
        state.heartbeat.as_ref().map(Heartbeat::pulses_sent).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_renders_as_hex() {
        let id = SessionId::new(vec![0x00, 0xab, 0x10]);
        assert_eq!(id.to_string(), "00ab10");
        assert_eq!(format!("{:?}", id), "SessionId(00ab10)");
        assert_eq!(id.as_bytes(), &[0x00, 0xab, 0x10]);
    }

    #[test]
    fn test_session_type_maps_to_wire_enum() {
        assert_eq!(proto::Type::from(SessionType::Data) as i32, 0);
        assert_eq!(proto::Type::from(SessionType::Schema) as i32, 1);
    }
}
