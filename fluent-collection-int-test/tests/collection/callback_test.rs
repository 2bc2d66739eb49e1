use fluent_collection::collection;
use fluent_collection::collection::Callback;
use fluent_collection::common::{Key, Value};
use fluent_collection::errors::ErrorKind;
use fluent_collection::val;
use fluent_collection_int_test::test_util::{create_test_context, run_test};

#[test]
fn test_unary_and_binary_callbacks() {
    run_test(create_test_context, |ctx| {
        let numbers = ctx.numbers();

        let mut big = Callback::unary(|v: &Value| v.as_int().map_or(false, |n| n > 2));
        assert_eq!(numbers.filter_callback(&mut big)?.count(), 2);
        assert_eq!(numbers.reject_callback(&mut big)?.count(), 2);
        assert!(!numbers.every_callback(&mut big)?);

        let mut first_two = Callback::binary(|_: &Value, k: &Key| k.as_index().map_or(false, |i| i < 2));
        let head = numbers.filter_callback(&mut first_two)?;
        assert_eq!(head, collection![1, 2]);
        Ok(())
    })
}

#[test]
fn test_dynamic_callback_result_is_truthiness() {
    run_test(create_test_context, |_ctx| {
        let collection = collection!["keep", "", "0", "also"];
        let mut identity = Callback::new(1, |args| args[0].clone());
        let kept = collection.filter_callback(&mut identity)?;
        assert_eq!(kept.values().cloned().collect::<Vec<_>>(), vec![val!("keep"), val!("also")]);
        Ok(())
    })
}

#[test]
fn test_three_parameter_callback_fails_without_mutation() {
    run_test(create_test_context, |ctx| {
        let numbers = ctx.numbers();
        let mut three = Callback::new(3, |_| val!(true));

        for (operation, result) in [
            ("filter", numbers.filter_callback(&mut three).map(|_| ())),
            ("reject", numbers.reject_callback(&mut three).map(|_| ())),
            ("every", numbers.every_callback(&mut three).map(|_| ())),
            ("each", numbers.each_callback(&mut three).map(|_| ())),
        ] {
            let err = result.unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::InvalidCallbackArity);
            assert!(err.message().contains(operation));
        }

        assert_eq!(numbers, ctx.numbers());
        Ok(())
    })
}

#[test]
fn test_zero_parameter_callback_fails() {
    run_test(create_test_context, |ctx| {
        let mut none = Callback::new(0, |_| Value::Null);
        let err = ctx.numbers().filter_callback(&mut none).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidCallbackArity);
        Ok(())
    })
}
