//! # Property Tests
//!
//! Random operation sequences run against a `BoundedMessageBuffer` and a
//! plain `Vec<String>` model. After every step the stream must agree with
//! the model and stay within its limits.

#[cfg(test)]
mod tests {
    use msg_stream::domain::{
        invariant_message_sizes, invariant_within_budget, invariant_within_capacity,
    };
    use msg_stream::{BoundedMessageBuffer, StreamError, MAX_MESSAGE_LEN};
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Append(String),
        Clear,
        ReadAll,
        ReadRange(usize, usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (0usize..=MAX_MESSAGE_LEN + 20).prop_map(|n| Op::Append("x".repeat(n))),
            1 => Just(Op::Clear),
            1 => Just(Op::ReadAll),
            2 => (0usize..12, 0usize..12).prop_map(|(low, high)| Op::ReadRange(low, high)),
        ]
    }

    /// Expected outcome of a mutation under the model, budget already charged.
    fn expected_append(model: &[String], limit: usize, message: &str) -> Option<StreamError> {
        let len = message.chars().count();
        if len > MAX_MESSAGE_LEN {
            Some(StreamError::MessageTooLarge {
                len,
                max: MAX_MESSAGE_LEN,
            })
        } else if model.len() >= limit {
            Some(StreamError::CapacityExceeded { capacity: limit })
        } else {
            None
        }
    }

    proptest! {
        #[test]
        fn prop_stream_matches_model(
            limit in 1usize..8,
            ops in prop::collection::vec(op_strategy(), 0..40),
        ) {
            let mut stream = BoundedMessageBuffer::with_limit(limit).unwrap();
            let mut model: Vec<String> = Vec::new();
            let mut used = 0usize;
            let budget = 2 * limit;

            for op in ops {
                match op {
                    Op::Append(message) => {
                        let result = stream.append(message.clone());
                        if used >= budget {
                            prop_assert_eq!(result, Err(StreamError::OperationBudgetExceeded { budget }));
                        } else {
                            used += 1;
                            match expected_append(&model, limit, &message) {
                                Some(err) => prop_assert_eq!(result, Err(err)),
                                None => {
                                    prop_assert!(result.is_ok());
                                    model.push(message);
                                }
                            }
                        }
                    }
                    Op::Clear => {
                        let result = stream.clear();
                        if used >= budget {
                            prop_assert_eq!(result, Err(StreamError::OperationBudgetExceeded { budget }));
                        } else {
                            used += 1;
                            if model.is_empty() {
                                prop_assert_eq!(result, Err(StreamError::EmptyBuffer));
                            } else {
                                prop_assert!(result.is_ok());
                                model.clear();
                            }
                        }
                    }
                    Op::ReadAll => {
                        let result = stream.read_all();
                        if model.is_empty() {
                            prop_assert_eq!(result, Err(StreamError::EmptyBuffer));
                        } else {
                            prop_assert_eq!(result, Ok(model.clone()));
                        }
                    }
                    Op::ReadRange(low, high) => {
                        let result = stream.read_range(low, high);
                        if high >= model.len() || low > high {
                            prop_assert_eq!(
                                result,
                                Err(StreamError::IndexOutOfRange { low, high, len: model.len() })
                            );
                        } else {
                            prop_assert_eq!(result, Ok(model[low..=high].to_vec()));
                        }
                    }
                }

                prop_assert_eq!(stream.len(), model.len());
                prop_assert!(invariant_within_capacity(stream.len(), stream.capacity_limit()));
                prop_assert_eq!(stream.operations_used(), used);
                prop_assert!(invariant_within_budget(stream.operations_used(), stream.operation_budget()));
                prop_assert!(invariant_message_sizes(stream.iter()));
            }
        }

        #[test]
        fn prop_copy_is_independent(
            messages in prop::collection::vec("[a-z]{0,20}", 1..10),
            extra in "[a-z]{1,20}",
        ) {
            let mut source = BoundedMessageBuffer::new();
            for message in &messages {
                source.append(message.as_str()).unwrap();
            }

            let mut copy = BoundedMessageBuffer::copy_of(&source);
            prop_assert_eq!(copy.operations_used(), 0);
            prop_assert_eq!(copy.read_all().unwrap(), messages.clone());

            source.append(extra.as_str()).unwrap();
            prop_assert_eq!(copy.len(), messages.len());

            copy.clear().unwrap();
            prop_assert_eq!(source.len(), messages.len() + 1);
        }

        #[test]
        fn prop_snapshot_outlives_later_mutations(
            messages in prop::collection::vec("[a-z]{1,10}", 1..10),
        ) {
            let mut stream = BoundedMessageBuffer::new();
            for message in &messages {
                stream.append(message.as_str()).unwrap();
            }

            let mut snapshot = stream.read_all().unwrap();
            snapshot.push("not in the stream".to_string());
            stream.clear().unwrap();

            prop_assert_eq!(snapshot.len(), messages.len() + 1);
            prop_assert_eq!(&snapshot[..messages.len()], &messages[..]);
            prop_assert!(stream.is_empty());
        }

        #[test]
        fn prop_multibyte_messages_count_characters(n in 0usize..=MAX_MESSAGE_LEN) {
            let mut stream = BoundedMessageBuffer::new();
            let message = "é".repeat(n);
            prop_assert!(stream.append(message).is_ok());
        }
    }
}
