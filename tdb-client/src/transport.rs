//! Transport seam between the protocol core and the gRPC channel
//!
//! Everything above this module speaks in protocol messages; only
//! [`GrpcTransport`] knows about tonic channels. Tests substitute their own
//! implementation of [`Transport`].

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};
use tdb_proto::{
    core_database, core_database_manager, session, transaction, type_db_client::TypeDbClient,
};
use tokio_stream::wrappers::ReceiverStream;
use tonic::transport::{Channel, Endpoint};
use tonic::Status;
use tracing::debug;

/// Outbound half of a transaction stream, fed by the stream controller.
pub type OutboundFrames = ReceiverStream<transaction::Client>;

/// Inbound half of a transaction stream.
pub type InboundFrames = BoxStream<'static, std::result::Result<transaction::Server, Status>>;

/// Calls exposed by a connection to the server.
#[async_trait]
pub trait Transport: Clone + Send + Sync + 'static {
    async fn databases_all(
        &self,
        req: core_database_manager::all::Req,
    ) -> std::result::Result<core_database_manager::all::Res, Status>;

    async fn databases_create(
        &self,
        req: core_database_manager::create::Req,
    ) -> std::result::Result<core_database_manager::create::Res, Status>;

    async fn databases_contains(
        &self,
        req: core_database_manager::contains::Req,
    ) -> std::result::Result<core_database_manager::contains::Res, Status>;

    async fn database_schema(
        &self,
        req: core_database::schema::Req,
    ) -> std::result::Result<core_database::schema::Res, Status>;

    async fn session_open(
        &self,
        req: session::open::Req,
    ) -> std::result::Result<session::open::Res, Status>;

    async fn session_close(
        &self,
        req: session::close::Req,
    ) -> std::result::Result<session::close::Res, Status>;

    async fn session_pulse(
        &self,
        req: session::pulse::Req,
    ) -> std::result::Result<session::pulse::Res, Status>;

    /// Start the bidirectional transaction stream.
    ///
    /// Frames already queued on `requests` are delivered before the call
    /// waits for response headers.
    async fn transaction(&self, requests: OutboundFrames)
        -> std::result::Result<InboundFrames, Status>;
}

/// Transport over a tonic channel
#[derive(Clone, Debug)]
pub struct GrpcTransport {
    inner: TypeDbClient<Channel>,
}

impl GrpcTransport {
    /// Connect to the server described by `config`
    ///
    /// # Example
    /// ```no_run
    /// # use tdb_client::{ClientConfig, GrpcTransport};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let transport = GrpcTransport::connect(&ClientConfig::new("localhost", 1729)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        let mut endpoint = Endpoint::from_shared(config.endpoint())
            .map_err(|e| ClientError::ConnectionError(format!("Invalid address: {}", e)))?;

        if let Some(timeout) = config.connect_timeout {
            endpoint = endpoint.connect_timeout(timeout);
        }

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| ClientError::ConnectionError(format!("Failed to connect: {}", e)))?;

        debug!(endpoint = %config.endpoint(), "Connected to server");
        Ok(Self::from_channel(channel))
    }

    /// Wrap an already established channel
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: TypeDbClient::new(channel),
        }
    }
}

#[async_trait]
impl Transport for GrpcTransport {
    async fn databases_all(
        &self,
        req: core_database_manager::all::Req,
    ) -> std::result::Result<core_database_manager::all::Res, Status> {
        Ok(self.inner.clone().databases_all(req).await?.into_inner())
    }

    async fn databases_create(
        &self,
        req: core_database_manager::create::Req,
    ) -> std::result::Result<core_database_manager::create::Res, Status> {
        Ok(self.inner.clone().databases_create(req).await?.into_inner())
    }

    async fn databases_contains(
        &self,
        req: core_database_manager::contains::Req,
    ) -> std::result::Result<core_database_manager::contains::Res, Status> {
        Ok(self.inner.clone().databases_contains(req).await?.into_inner())
    }

    async fn database_schema(
        &self,
        req: core_database::schema::Req,
    ) -> std::result::Result<core_database::schema::Res, Status> {
        Ok(self.inner.clone().database_schema(req).await?.into_inner())
    }

    async fn session_open(
        &self,
        req: session::open::Req,
    ) -> std::result::Result<session::open::Res, Status> {
        Ok(self.inner.clone().session_open(req).await?.into_inner())
    }

    async fn session_close(
        &self,
        req: session::close::Req,
    ) -> std::result::Result<session::close::Res, Status> {
        Ok(self.inner.clone().session_close(req).await?.into_inner())
    }

    async fn session_pulse(
        &self,
        req: session::pulse::Req,
    ) -> std::result::Result<session::pulse::Res, Status> {
        Ok(self.inner.clone().session_pulse(req).await?.into_inner())
    }

    async fn transaction(
        &self,
        requests: OutboundFrames,
    ) -> std::result::Result<InboundFrames, Status> {
        let response = self.inner.clone().transaction(requests).await?;
        Ok(response.into_inner().boxed())
    }
}
