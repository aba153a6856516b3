/// Graph database client
use crate::concept::{ConceptMap, Type};
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::frame::QueryOptions;
use crate::query::{QueryAnswers, QueryKind};
use crate::session::{SessionId, SessionManager, SessionType};
use crate::transport::{GrpcTransport, Transport};
use std::collections::BTreeMap;
use tdb_proto::{core_database, core_database_manager};
use tracing::debug;

/// Remote graph database client
///
/// Holds one long-lived data session at a time. Queries run against the
/// database opened with [`open_database`](Self::open_database).
pub struct Client<T: Transport = GrpcTransport> {
    transport: T,
    sessions: SessionManager<T>,
    config: ClientConfig,
}

impl Client<GrpcTransport> {
    /// Connect to a graph database server
    ///
    /// # Example
    /// ```no_run
    /// # use tdb_client::{Client, ClientConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::connect(ClientConfig::new("localhost", 1729)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = GrpcTransport::connect(&config).await?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> Client<T> {
    /// Build a client over an existing transport
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        let sessions = SessionManager::new(transport.clone(), config.pulse_interval);
        Self {
            transport,
            sessions,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Session manager owning the data session and its heartbeat
    pub fn sessions(&self) -> &SessionManager<T> {
        &self.sessions
    }

    /// List database names
    pub async fn databases(&self) -> Result<Vec<String>> {
        let response = self
            .transport
            .databases_all(core_database_manager::all::Req {})
            .await?;
        Ok(response.names)
    }

    /// Create a database
    pub async fn create_database(&self, name: &str) -> Result<()> {
        check_name(name)?;
        self.transport
            .databases_create(core_database_manager::create::Req {
                name: name.to_string(),
            })
            .await?;
        debug!(database = name, "Database created");
        Ok(())
    }

    pub async fn contains_database(&self, name: &str) -> Result<bool> {
        check_name(name)?;
        let response = self
            .transport
            .databases_contains(core_database_manager::contains::Req {
                name: name.to_string(),
            })
            .await?;
        Ok(response.contains)
    }

    /// Schema text of the currently selected database
    pub async fn schema(&self) -> Result<String> {
        let database = self
            .sessions
            .current_database()
            .await
            .ok_or_else(|| ClientError::SessionError("no database has been opened".to_string()))?;

        let response = self
            .transport
            .database_schema(core_database::schema::Req { name: database })
            .await?;
        Ok(response.schema)
    }

    /// Open a data session on `database`
    ///
    /// A session that is already open is closed first.
    ///
    /// # Example
    /// ```no_run
    /// # use tdb_client::{Client, ClientConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::connect(ClientConfig::default()).await?;
    /// client.open_database("zoo").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn open_database(&self, database: &str) -> Result<SessionId> {
        self.sessions.open(database, SessionType::Data).await
    }

    /// Close the data session
    pub async fn close_database(&self) -> Result<()> {
        self.sessions.close().await
    }

    /// Start a query and return its lazy result sequence
    ///
    /// No frame is sent until the sequence is first advanced.
    ///
    /// # Example
    /// ```no_run
    /// # use tdb_client::{Client, ClientConfig, QueryKind};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::connect(ClientConfig::default()).await?;
    /// client.open_database("zoo").await?;
    ///
    /// let mut answers = client.query("match $x isa animal; get $x;", QueryKind::Match).await?;
    /// while let Some(answer) = answers.next().await? {
    ///     println!("{:?}", answer.get("x"));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn query(&self, query: &str, kind: QueryKind) -> Result<QueryAnswers<T>> {
        if query.trim().is_empty() {
            return Err(ClientError::InvalidArgument("query must not be empty".to_string()));
        }

        let session = self
            .sessions
            .active()
            .await
            .ok_or_else(|| ClientError::SessionError("no database is open".to_string()))?;

        Ok(QueryAnswers::new(
            self.transport.clone(),
            kind,
            query,
            session.database(),
            session.id().clone(),
            QueryOptions {
                parallel: self.config.parallel,
            },
            self.config.stream_buffer,
        ))
    }

    /// Run a query to completion and collect every record
    pub async fn execute(&self, query: &str, kind: QueryKind) -> Result<Vec<ConceptMap>> {
        self.query(query, kind).await?.collect().await
    }

    pub async fn all_entities(&self) -> Result<Vec<ConceptMap>> {
        self.execute("match $x sub entity; get $x;", QueryKind::Match).await
    }

    pub async fn all_relations(&self) -> Result<Vec<ConceptMap>> {
        self.execute("match $x sub relation; get $x;", QueryKind::Match).await
    }

    pub async fn all_attributes(&self) -> Result<Vec<ConceptMap>> {
        self.execute("match $x sub attribute; get $x;", QueryKind::Match).await
    }

    /// Attribute types owned by instances of `type_name`, keyed by label
    pub async fn attributes_of(&self, type_name: &str) -> Result<BTreeMap<String, Type>> {
        if type_name.is_empty()
            || !type_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ClientError::InvalidArgument(format!(
                "invalid type name: {:?}",
                type_name
            )));
        }

        let query = format!("match $p isa {}; $p has attribute $a; get $a;", type_name);
        let answers = self.execute(&query, QueryKind::Match).await?;

        let mut attributes = BTreeMap::new();
        for answer in &answers {
            if let Some(t) = answer.get("a").and_then(|c| c.type_of()) {
                attributes.entry(t.label.clone()).or_insert_with(|| t.clone());
            }
        }
        Ok(attributes)
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ClientError::InvalidArgument(
            "database name must not be empty".to_string(),
        ));
    }
    Ok(())
}
