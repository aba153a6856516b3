//! Protocol Buffers messages and gRPC client stubs for the TypeDB wire protocol.
//!
//! The generated code lives in `typedb.protocol.rs` and is checked in. Rebuild
//! it from `proto/typedb.proto` with `--features generate`.

#[allow(clippy::all, clippy::pedantic)]
mod protocol {
    include!("typedb.protocol.rs");
}

pub use protocol::*;

/// gRPC service name, as used in request paths.
pub const SERVICE_NAME: &str = "typedb.protocol.TypeDB";

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_server_frame_oneof_tags() {
        // Transaction.Server { ResPart res_part = 2 } -> key byte (2 << 3) | 2
        let frame = transaction::Server {
            server: Some(transaction::server::Server::ResPart(transaction::ResPart {
                req_id: vec![7],
                res: Some(transaction::res_part::Res::StreamResPart(
                    transaction::stream::ResPart {
                        state: transaction::stream::State::Done as i32,
                    },
                )),
            })),
        };

        let bytes = frame.encode_to_vec();
        assert_eq!(bytes[0], 0x12);

        let decoded = transaction::Server::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, frame);
    }

    #[test]
    fn test_query_request_variant_tags() {
        let req = query_manager::Req {
            options: Some(Options {
                parallel: Some(true),
                ..Default::default()
            }),
            req: Some(query_manager::req::Req::InsertReq(query_manager::insert::Req {
                query: "insert $x isa animal;".to_string(),
            })),
        };

        let bytes = req.encode_to_vec();
        // Options at tag 1, then field 106 as a length-delimited varint key (0xd2 0x06).
        assert_eq!(bytes[0], 0x0a);
        assert!(bytes.windows(2).any(|w| w == [0xd2, 0x06]));
    }

    #[test]
    fn test_stream_state_getter_defaults_to_continue() {
        let part = transaction::stream::ResPart::default();
        assert_eq!(part.state(), transaction::stream::State::Continue);
    }
}
