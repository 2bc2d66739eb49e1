use fluent_collection::collection;
use fluent_collection::collection::{Collection, JsonOptions};
use fluent_collection::errors::ErrorKind;
use fluent_collection_int_test::test_util::{create_test_context, run_test};

#[test]
fn test_sequential_renders_as_array() {
    run_test(create_test_context, |ctx| {
        let json = ctx.numbers().to_json(&JsonOptions::default())?;
        assert_eq!(json, "[1,2,3,4]");
        Ok(())
    })
}

#[test]
fn test_non_sequential_renders_as_object() {
    run_test(create_test_context, |ctx| {
        let mut numbers = ctx.numbers();
        numbers.shift();
        numbers.set("extra", true);
        let json = numbers.to_json(&JsonOptions::default())?;
        assert_eq!(json, r#"{"0":2,"1":3,"2":4,"extra":true}"#);

        let odd = ctx.numbers().filter(|v| v.as_int().map_or(false, |n| n % 2 == 1));
        assert_eq!(odd.to_json(&JsonOptions::default())?, r#"{"0":1,"2":3}"#);
        Ok(())
    })
}

#[test]
fn test_round_trip() {
    run_test(create_test_context, |ctx| {
        for collection in [
            ctx.people(),
            ctx.numbers(),
            Collection::new(),
            collection! { label: "x", nested: { list: [1, 2.5, ()], flag: false } },
        ] {
            let json = collection.to_json(&JsonOptions::default())?;
            let parsed = Collection::from_json(&json)?;
            assert_eq!(parsed.to_array(), collection.to_array());
        }
        Ok(())
    })
}

#[test]
fn test_pretty_print_round_trip() {
    run_test(create_test_context, |ctx| {
        let options = JsonOptions::new().pretty_print(true);
        let json = ctx.people().to_json(&options)?;
        assert!(json.contains("\n    {"));
        assert_eq!(Collection::from_json(&json)?, ctx.people());
        Ok(())
    })
}

#[test]
fn test_invalid_json_is_encoding_error() {
    run_test(create_test_context, |_ctx| {
        let err = Collection::from_json("{\"a\":").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::EncodingError);
        Ok(())
    })
}
