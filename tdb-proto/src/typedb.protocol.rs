#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CoreDatabaseManager {}
/// Nested message and enum types in `CoreDatabaseManager`.
pub mod core_database_manager {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Contains {}
    /// Nested message and enum types in `Contains`.
    pub mod contains {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {
            #[prost(string, tag = "1")]
            pub name: ::prost::alloc::string::String,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Res {
            #[prost(bool, tag = "1")]
            pub contains: bool,
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Create {}
    /// Nested message and enum types in `Create`.
    pub mod create {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {
            #[prost(string, tag = "1")]
            pub name: ::prost::alloc::string::String,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Res {}
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct All {}
    /// Nested message and enum types in `All`.
    pub mod all {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {}
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Res {
            #[prost(string, repeated, tag = "1")]
            pub names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CoreDatabase {}
/// Nested message and enum types in `CoreDatabase`.
pub mod core_database {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Schema {}
    /// Nested message and enum types in `Schema`.
    pub mod schema {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {
            #[prost(string, tag = "1")]
            pub name: ::prost::alloc::string::String,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Res {
            #[prost(string, tag = "1")]
            pub schema: ::prost::alloc::string::String,
        }
    }
}
/// Single-field oneofs in the server's schema; proto3 `optional` is wire-identical.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Options {
    #[prost(bool, optional, tag = "1")]
    pub infer: ::core::option::Option<bool>,
    #[prost(bool, optional, tag = "2")]
    pub trace_inference: ::core::option::Option<bool>,
    #[prost(bool, optional, tag = "3")]
    pub explain: ::core::option::Option<bool>,
    #[prost(bool, optional, tag = "4")]
    pub parallel: ::core::option::Option<bool>,
    #[prost(int32, optional, tag = "5")]
    pub prefetch_size: ::core::option::Option<i32>,
    #[prost(bool, optional, tag = "6")]
    pub prefetch: ::core::option::Option<bool>,
    #[prost(int32, optional, tag = "7")]
    pub session_idle_timeout_millis: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "8")]
    pub transaction_timeout_millis: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "9")]
    pub schema_lock_acquire_timeout_millis: ::core::option::Option<i32>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Session {}
/// Nested message and enum types in `Session`.
pub mod session {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Open {}
    /// Nested message and enum types in `Open`.
    pub mod open {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {
            #[prost(string, tag = "1")]
            pub database: ::prost::alloc::string::String,
            #[prost(enumeration = "super::Type", tag = "2")]
            pub r#type: i32,
            #[prost(message, optional, tag = "3")]
            pub options: ::core::option::Option<super::super::Options>,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Res {
            #[prost(bytes = "vec", tag = "1")]
            pub session_id: ::prost::alloc::vec::Vec<u8>,
            #[prost(int32, tag = "2")]
            pub server_duration_millis: i32,
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Close {}
    /// Nested message and enum types in `Close`.
    pub mod close {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {
            #[prost(bytes = "vec", tag = "1")]
            pub session_id: ::prost::alloc::vec::Vec<u8>,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Res {}
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Pulse {}
    /// Nested message and enum types in `Pulse`.
    pub mod pulse {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {
            #[prost(bytes = "vec", tag = "1")]
            pub session_id: ::prost::alloc::vec::Vec<u8>,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Res {
            #[prost(bool, tag = "1")]
            pub alive: bool,
        }
    }
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        Data = 0,
        Schema = 1,
    }
    impl Type {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Type::Data => "DATA",
                Type::Schema => "SCHEMA",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "DATA" => Some(Self::Data),
                "SCHEMA" => Some(Self::Schema),
                _ => None,
            }
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transaction {}
/// Nested message and enum types in `Transaction`.
pub mod transaction {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Client {
        #[prost(message, repeated, tag = "1")]
        pub reqs: ::prost::alloc::vec::Vec<Req>,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Server {
        #[prost(oneof = "server::Server", tags = "1, 2")]
        pub server: ::core::option::Option<server::Server>,
    }
    /// Nested message and enum types in `Server`.
    pub mod server {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Server {
            #[prost(message, tag = "1")]
            Res(super::Res),
            #[prost(message, tag = "2")]
            ResPart(super::ResPart),
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Req {
        #[prost(bytes = "vec", tag = "1")]
        pub req_id: ::prost::alloc::vec::Vec<u8>,
        #[prost(map = "string, string", tag = "2")]
        pub metadata: ::std::collections::HashMap<
            ::prost::alloc::string::String,
            ::prost::alloc::string::String,
        >,
        #[prost(oneof = "req::Req", tags = "3, 4, 5, 6, 7")]
        pub req: ::core::option::Option<req::Req>,
    }
    /// Nested message and enum types in `Req`.
    pub mod req {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Req {
            #[prost(message, tag = "3")]
            OpenReq(super::open::Req),
            #[prost(message, tag = "4")]
            StreamReq(super::stream::Req),
            #[prost(message, tag = "5")]
            CommitReq(super::commit::Req),
            #[prost(message, tag = "6")]
            RollbackReq(super::rollback::Req),
            #[prost(message, tag = "7")]
            QueryManagerReq(super::super::query_manager::Req),
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Res {
        #[prost(bytes = "vec", tag = "1")]
        pub req_id: ::prost::alloc::vec::Vec<u8>,
        #[prost(oneof = "res::Res", tags = "2, 3, 4, 5")]
        pub res: ::core::option::Option<res::Res>,
    }
    /// Nested message and enum types in `Res`.
    pub mod res {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Res {
            #[prost(message, tag = "2")]
            OpenRes(super::open::Res),
            #[prost(message, tag = "3")]
            CommitRes(super::commit::Res),
            #[prost(message, tag = "4")]
            RollbackRes(super::rollback::Res),
            #[prost(message, tag = "5")]
            QueryManagerRes(super::super::query_manager::Res),
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ResPart {
        #[prost(bytes = "vec", tag = "1")]
        pub req_id: ::prost::alloc::vec::Vec<u8>,
        #[prost(oneof = "res_part::Res", tags = "2, 3")]
        pub res: ::core::option::Option<res_part::Res>,
    }
    /// Nested message and enum types in `ResPart`.
    pub mod res_part {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Res {
            #[prost(message, tag = "2")]
            QueryManagerResPart(super::super::query_manager::ResPart),
            #[prost(message, tag = "3")]
            StreamResPart(super::stream::ResPart),
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Open {}
    /// Nested message and enum types in `Open`.
    pub mod open {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {
            #[prost(bytes = "vec", tag = "1")]
            pub session_id: ::prost::alloc::vec::Vec<u8>,
            #[prost(enumeration = "super::Type", tag = "2")]
            pub r#type: i32,
            #[prost(message, optional, tag = "3")]
            pub options: ::core::option::Option<super::super::Options>,
            #[prost(int32, tag = "4")]
            pub network_latency_millis: i32,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Res {}
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Stream {}
    /// Nested message and enum types in `Stream`.
    pub mod stream {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {}
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ResPart {
            #[prost(enumeration = "State", tag = "1")]
            pub state: i32,
        }
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum State {
            Continue = 0,
            Done = 1,
        }
        impl State {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    State::Continue => "CONTINUE",
                    State::Done => "DONE",
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "CONTINUE" => Some(Self::Continue),
                    "DONE" => Some(Self::Done),
                    _ => None,
                }
            }
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Commit {}
    /// Nested message and enum types in `Commit`.
    pub mod commit {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {}
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Res {}
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Rollback {}
    /// Nested message and enum types in `Rollback`.
    pub mod rollback {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {}
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Res {}
    }
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        Read = 0,
        Write = 1,
    }
    impl Type {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Type::Read => "READ",
                Type::Write => "WRITE",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "READ" => Some(Self::Read),
                "WRITE" => Some(Self::Write),
                _ => None,
            }
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryManager {}
/// Nested message and enum types in `QueryManager`.
pub mod query_manager {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Req {
        #[prost(message, optional, tag = "1")]
        pub options: ::core::option::Option<super::Options>,
        #[prost(oneof = "req::Req", tags = "100, 101, 102, 106, 107, 108")]
        pub req: ::core::option::Option<req::Req>,
    }
    /// Nested message and enum types in `Req`.
    pub mod req {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Req {
            #[prost(message, tag = "100")]
            DefineReq(super::define::Req),
            #[prost(message, tag = "101")]
            UndefineReq(super::undefine::Req),
            #[prost(message, tag = "102")]
            MatchReq(super::r#match::Req),
            #[prost(message, tag = "106")]
            InsertReq(super::insert::Req),
            #[prost(message, tag = "107")]
            DeleteReq(super::delete::Req),
            #[prost(message, tag = "108")]
            UpdateReq(super::update::Req),
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Res {
        #[prost(oneof = "res::Res", tags = "100, 101, 104")]
        pub res: ::core::option::Option<res::Res>,
    }
    /// Nested message and enum types in `Res`.
    pub mod res {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Res {
            #[prost(message, tag = "100")]
            DefineRes(super::define::Res),
            #[prost(message, tag = "101")]
            UndefineRes(super::undefine::Res),
            #[prost(message, tag = "104")]
            DeleteRes(super::delete::Res),
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ResPart {
        #[prost(oneof = "res_part::Res", tags = "100, 103, 104")]
        pub res: ::core::option::Option<res_part::Res>,
    }
    /// Nested message and enum types in `ResPart`.
    pub mod res_part {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Res {
            #[prost(message, tag = "100")]
            MatchResPart(super::r#match::ResPart),
            #[prost(message, tag = "103")]
            InsertResPart(super::insert::ResPart),
            #[prost(message, tag = "104")]
            UpdateResPart(super::update::ResPart),
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Match {}
    /// Nested message and enum types in `Match`.
    pub mod r#match {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {
            #[prost(string, tag = "1")]
            pub query: ::prost::alloc::string::String,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ResPart {
            #[prost(message, repeated, tag = "1")]
            pub answers: ::prost::alloc::vec::Vec<super::super::ConceptMap>,
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Insert {}
    /// Nested message and enum types in `Insert`.
    pub mod insert {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {
            #[prost(string, tag = "1")]
            pub query: ::prost::alloc::string::String,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ResPart {
            #[prost(message, repeated, tag = "1")]
            pub answers: ::prost::alloc::vec::Vec<super::super::ConceptMap>,
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Update {}
    /// Nested message and enum types in `Update`.
    pub mod update {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {
            #[prost(string, tag = "1")]
            pub query: ::prost::alloc::string::String,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ResPart {
            #[prost(message, repeated, tag = "1")]
            pub answers: ::prost::alloc::vec::Vec<super::super::ConceptMap>,
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Delete {}
    /// Nested message and enum types in `Delete`.
    pub mod delete {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {
            #[prost(string, tag = "1")]
            pub query: ::prost::alloc::string::String,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Res {}
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Define {}
    /// Nested message and enum types in `Define`.
    pub mod define {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {
            #[prost(string, tag = "1")]
            pub query: ::prost::alloc::string::String,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Res {}
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Undefine {}
    /// Nested message and enum types in `Undefine`.
    pub mod undefine {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Req {
            #[prost(string, tag = "1")]
            pub query: ::prost::alloc::string::String,
        }
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Res {}
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConceptMap {
    #[prost(map = "string, message", tag = "1")]
    pub map: ::std::collections::HashMap<::prost::alloc::string::String, Concept>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Concept {
    #[prost(oneof = "concept::Concept", tags = "1, 2")]
    pub concept: ::core::option::Option<concept::Concept>,
}
/// Nested message and enum types in `Concept`.
pub mod concept {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Concept {
        #[prost(message, tag = "1")]
        Thing(super::Thing),
        #[prost(message, tag = "2")]
        Type(super::Type),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Thing {
    #[prost(bytes = "vec", tag = "1")]
    pub iid: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub r#type: ::core::option::Option<Type>,
    #[prost(message, optional, tag = "3")]
    pub value: ::core::option::Option<attribute::Value>,
    #[prost(bool, tag = "4")]
    pub inferred: bool,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Type {
    #[prost(string, tag = "1")]
    pub label: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub scope: ::prost::alloc::string::String,
    #[prost(enumeration = "r#type::Encoding", tag = "3")]
    pub encoding: i32,
    #[prost(enumeration = "attribute_type::ValueType", tag = "4")]
    pub value_type: i32,
    #[prost(bool, tag = "5")]
    pub root: bool,
}
/// Nested message and enum types in `Type`.
pub mod r#type {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Encoding {
        ThingType = 0,
        EntityType = 1,
        RelationType = 2,
        AttributeType = 3,
        RoleType = 4,
    }
    impl Encoding {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Encoding::ThingType => "THING_TYPE",
                Encoding::EntityType => "ENTITY_TYPE",
                Encoding::RelationType => "RELATION_TYPE",
                Encoding::AttributeType => "ATTRIBUTE_TYPE",
                Encoding::RoleType => "ROLE_TYPE",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "THING_TYPE" => Some(Self::ThingType),
                "ENTITY_TYPE" => Some(Self::EntityType),
                "RELATION_TYPE" => Some(Self::RelationType),
                "ATTRIBUTE_TYPE" => Some(Self::AttributeType),
                "ROLE_TYPE" => Some(Self::RoleType),
                _ => None,
            }
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Attribute {}
/// Nested message and enum types in `Attribute`.
pub mod attribute {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Value {
        #[prost(oneof = "value::Value", tags = "1, 2, 3, 4, 5")]
        pub value: ::core::option::Option<value::Value>,
    }
    /// Nested message and enum types in `Value`.
    pub mod value {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Value {
            #[prost(string, tag = "1")]
            String(::prost::alloc::string::String),
            #[prost(bool, tag = "2")]
            Boolean(bool),
            #[prost(int64, tag = "3")]
            Long(i64),
            #[prost(double, tag = "4")]
            Double(f64),
            /// time since epoch in milliseconds
            #[prost(int64, tag = "5")]
            DateTime(i64),
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AttributeType {}
/// Nested message and enum types in `AttributeType`.
pub mod attribute_type {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum ValueType {
        Object = 0,
        Boolean = 1,
        Long = 2,
        Double = 3,
        String = 4,
        Datetime = 5,
    }
    impl ValueType {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                ValueType::Object => "OBJECT",
                ValueType::Boolean => "BOOLEAN",
                ValueType::Long => "LONG",
                ValueType::Double => "DOUBLE",
                ValueType::String => "STRING",
                ValueType::Datetime => "DATETIME",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "OBJECT" => Some(Self::Object),
                "BOOLEAN" => Some(Self::Boolean),
                "LONG" => Some(Self::Long),
                "DOUBLE" => Some(Self::Double),
                "STRING" => Some(Self::String),
                "DATETIME" => Some(Self::Datetime),
                _ => None,
            }
        }
    }
}
/// Generated client implementations.
pub mod type_db_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    #[derive(Debug, Clone)]
    pub struct TypeDbClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl TypeDbClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> TypeDbClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        /// Database Manager API
        pub async fn databases_contains(
            &mut self,
            request: impl tonic::IntoRequest<super::core_database_manager::contains::Req>,
        ) -> std::result::Result<
            tonic::Response<super::core_database_manager::contains::Res>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/typedb.protocol.TypeDB/databases_contains",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn databases_create(
            &mut self,
            request: impl tonic::IntoRequest<super::core_database_manager::create::Req>,
        ) -> std::result::Result<
            tonic::Response<super::core_database_manager::create::Res>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/typedb.protocol.TypeDB/databases_create",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn databases_all(
            &mut self,
            request: impl tonic::IntoRequest<super::core_database_manager::all::Req>,
        ) -> std::result::Result<
            tonic::Response<super::core_database_manager::all::Res>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/typedb.protocol.TypeDB/databases_all",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        /// Database API
        pub async fn database_schema(
            &mut self,
            request: impl tonic::IntoRequest<super::core_database::schema::Req>,
        ) -> std::result::Result<
            tonic::Response<super::core_database::schema::Res>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/typedb.protocol.TypeDB/database_schema",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        /// Session API
        pub async fn session_open(
            &mut self,
            request: impl tonic::IntoRequest<super::session::open::Req>,
        ) -> std::result::Result<
            tonic::Response<super::session::open::Res>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/typedb.protocol.TypeDB/session_open",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn session_close(
            &mut self,
            request: impl tonic::IntoRequest<super::session::close::Req>,
        ) -> std::result::Result<
            tonic::Response<super::session::close::Res>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/typedb.protocol.TypeDB/session_close",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        /// Checks with the server that the session is still alive, and informs it that it should be kept alive.
        pub async fn session_pulse(
            &mut self,
            request: impl tonic::IntoRequest<super::session::pulse::Req>,
        ) -> std::result::Result<
            tonic::Response<super::session::pulse::Res>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/typedb.protocol.TypeDB/session_pulse",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        /// Transaction Streaming API
        /// Opens a bi-directional stream representing a stateful transaction, streaming
        /// requests and responses back-and-forth. The first transaction client message must
        /// be {Transaction.Open.Req}. Closing the stream closes the transaction.
        pub async fn transaction(
            &mut self,
            request: impl tonic::IntoStreamingRequest<
                Message = super::transaction::Client,
            >,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::transaction::Server>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/typedb.protocol.TypeDB/transaction",
            );
            self.inner.streaming(request.into_streaming_request(), path, codec).await
        }
    }
}
