//! Shape-selection properties of the read request builder.

use plc_read_request::{
    DataType, ReadItems, ReadRequest, ReadRequestBuilder, RequestError, RequestKind,
};
use proptest::prelude::*;

fn data_type() -> impl Strategy<Value = DataType> {
    prop::sample::select(DataType::ALL.to_vec())
}

/// Builds with item `i` at address `i`.
fn builder_for(types: &[DataType]) -> ReadRequestBuilder<usize> {
    types
        .iter()
        .enumerate()
        .fold(ReadRequestBuilder::new(), |builder, (address, data_type)| {
            builder.add_item(*data_type, address)
        })
}

fn addresses(request: &ReadRequest<usize>) -> Vec<usize> {
    request.items().iter().map(|item| *item.address()).collect()
}

proptest! {
    #[test]
    fn uniform_types_pick_typed_shape(data_type in data_type(), count in 1usize..32) {
        let request = builder_for(&vec![data_type; count]).finalize().unwrap();

        let expected = if count == 1 { RequestKind::Single } else { RequestKind::TypedBulk };
        prop_assert_eq!(request.kind(), expected);
        prop_assert_eq!(request.shared_data_type(), Some(data_type));
        prop_assert_eq!(request.item_count(), count);
    }

    #[test]
    fn mixed_types_pick_generic_shape(
        types in prop::collection::vec(data_type(), 2..32),
        expected in data_type(),
    ) {
        prop_assume!(types.iter().any(|t| *t != types[0]));

        let request = builder_for(&types).finalize().unwrap();
        prop_assert_eq!(request.kind(), RequestKind::Generic);
        prop_assert_eq!(request.shared_data_type(), None);
        prop_assert_eq!(request.data_types().collect::<Vec<_>>(), types.clone());

        let err = builder_for(&types).finalize_typed_bulk(expected).unwrap_err();
        if expected == types[0] {
            prop_assert_eq!(err, RequestError::invalid_state("mixed types contained"));
        } else {
            prop_assert!(err.is_type_mismatch());
        }
    }

    #[test]
    fn mixed_types_never_typed_bulk(types in prop::collection::vec(data_type(), 2..32)) {
        prop_assume!(types.iter().any(|t| *t != types[0]));

        for expected in DataType::ALL {
            prop_assert!(builder_for(&types).finalize_typed_bulk(expected).is_err());
        }
    }

    #[test]
    fn order_is_preserved(types in prop::collection::vec(data_type(), 1..64)) {
        let request = builder_for(&types).finalize().unwrap();
        prop_assert_eq!(addresses(&request), (0..types.len()).collect::<Vec<_>>());
    }

    #[test]
    fn typed_single_checks_type(actual in data_type(), expected in data_type()) {
        let result = builder_for(&[actual]).finalize_typed(expected);

        if actual == expected {
            let request = result.unwrap();
            prop_assert_eq!(request.data_type(), actual);
            prop_assert_eq!(*request.item().address(), 0);
        } else {
            prop_assert_eq!(result.unwrap_err(), RequestError::type_mismatch(expected, actual));
        }
    }

    #[test]
    fn typed_single_rejects_other_counts(types in prop::collection::vec(data_type(), 2..16)) {
        let err = builder_for(&types).finalize_typed(types[0]).unwrap_err();
        prop_assert!(err.is_invalid_state());
    }
}

#[test]
fn empty_builder_always_fails() {
    let err = ReadRequestBuilder::<usize>::new().finalize().unwrap_err();
    assert!(err.is_invalid_state());

    for data_type in DataType::ALL {
        assert!(ReadRequestBuilder::<usize>::new()
            .finalize_typed(data_type)
            .unwrap_err()
            .is_invalid_state());
        assert!(ReadRequestBuilder::<usize>::new()
            .finalize_typed_bulk(data_type)
            .unwrap_err()
            .is_invalid_state());
    }
}

#[test]
fn bulk_on_single_item_fails() {
    let err = builder_for(&[DataType::Int16]).finalize_bulk().unwrap_err();
    assert_eq!(
        err,
        RequestError::invalid_state("bulk request needs more than one request")
    );
}

#[test]
fn int_pair_is_typed_bulk() {
    let request = ReadRequest::builder()
        .add_item(DataType::Int16, "addrA")
        .add_item(DataType::Int16, "addrB")
        .finalize()
        .unwrap();

    let ReadRequest::TypedBulk(bulk) = request else {
        panic!("expected typed bulk request");
    };
    assert_eq!(bulk.data_type(), DataType::Int16);
    let addresses: Vec<_> = bulk.items().iter().map(|item| *item.address()).collect();
    assert_eq!(addresses, vec!["addrA", "addrB"]);
}

#[test]
fn int_bool_is_generic() {
    let request = ReadRequest::builder()
        .add_item(DataType::Int16, "addrA")
        .add_item(DataType::Bool, "addrB")
        .finalize()
        .unwrap();

    let ReadRequest::Generic(generic) = request else {
        panic!("expected generic request");
    };
    let items: Vec<_> = generic
        .items()
        .iter()
        .map(|item| (*item.address(), item.data_type()))
        .collect();
    assert_eq!(
        items,
        vec![("addrA", DataType::Int16), ("addrB", DataType::Bool)]
    );
}

#[test]
fn requests_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReadRequest<String>>();
    assert_send_sync::<ReadRequestBuilder<String>>();

    let handles: Vec<_> = (0..4)
        .map(|n| {
            std::thread::spawn(move || {
                builder_for(&vec![DataType::UInt32; n + 1])
                    .finalize()
                    .map(|request| request.item_count())
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap().unwrap(), n + 1);
    }
}
