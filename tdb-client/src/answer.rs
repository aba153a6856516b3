//! Classification of inbound frames for the result receive loop
use tdb_proto::{query_manager, transaction, ConceptMap};

/// What the receive loop does with one inbound frame
#[derive(Debug, PartialEq)]
pub(crate) enum Step {
    /// Result records to yield, in order
    Answers(Vec<ConceptMap>),
    /// Server has another page; send a stream-continue frame
    Continue,
    /// Terminal frame
    Done,
    /// Contributes nothing and does not terminate
    Skip,
}

pub(crate) fn classify(frame: transaction::Server) -> Step {
    use transaction::res_part::Res as PartRes;

    match frame.server {
        Some(transaction::server::Server::Res(_)) => Step::Done,
        Some(transaction::server::Server::ResPart(part)) => match part.res {
            Some(PartRes::StreamResPart(stream)) => match stream.state() {
                transaction::stream::State::Continue => Step::Continue,
                transaction::stream::State::Done => Step::Done,
            },
            Some(PartRes::QueryManagerResPart(query)) => match query.res {
                Some(query_manager::res_part::Res::MatchResPart(r)) => Step::Answers(r.answers),
                Some(query_manager::res_part::Res::InsertResPart(r)) => Step::Answers(r.answers),
                Some(query_manager::res_part::Res::UpdateResPart(r)) => Step::Answers(r.answers),
                None => Step::Skip,
            },
            None => Step::Skip,
        },
        None => Step::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(res: transaction::res_part::Res) -> transaction::Server {
        transaction::Server {
            server: Some(transaction::server::Server::ResPart(transaction::ResPart {
                req_id: vec![],
                res: Some(res),
            })),
        }
    }

    fn stream_state(state: transaction::stream::State) -> transaction::Server {
        part(transaction::res_part::Res::StreamResPart(transaction::stream::ResPart {
            state: state as i32,
        }))
    }

    #[test]
    fn test_final_response_terminates() {
        let frame = transaction::Server {
            server: Some(transaction::server::Server::Res(transaction::Res {
                req_id: vec![],
                res: Some(transaction::res::Res::QueryManagerRes(query_manager::Res {
                    res: Some(query_manager::res::Res::DeleteRes(query_manager::delete::Res {})),
                })),
            })),
        };
        assert_eq!(classify(frame), Step::Done);
    }

    #[test]
    fn test_continuation_states() {
        assert_eq!(classify(stream_state(transaction::stream::State::Continue)), Step::Continue);
        assert_eq!(classify(stream_state(transaction::stream::State::Done)), Step::Done);
    }

    #[test]
    fn test_result_parts_yield_answers_in_order() {
        let answers = vec![ConceptMap::default(), ConceptMap::default()];

        let matched = part(transaction::res_part::Res::QueryManagerResPart(query_manager::ResPart {
            res: Some(query_manager::res_part::Res::MatchResPart(query_manager::r#match::ResPart {
                answers: answers.clone(),
            })),
        }));
        assert_eq!(classify(matched), Step::Answers(answers.clone()));

        let inserted = part(transaction::res_part::Res::QueryManagerResPart(query_manager::ResPart {
            res: Some(query_manager::res_part::Res::InsertResPart(query_manager::insert::ResPart {
                answers: answers.clone(),
            })),
        }));
        assert_eq!(classify(inserted), Step::Answers(answers));
    }

    #[test]
    fn test_other_shapes_are_skipped() {
        let empty_part = part(transaction::res_part::Res::QueryManagerResPart(
            query_manager::ResPart { res: None },
        ));
        assert_eq!(classify(empty_part), Step::Skip);
        assert_eq!(classify(transaction::Server { server: None }), Step::Skip);
    }
}
