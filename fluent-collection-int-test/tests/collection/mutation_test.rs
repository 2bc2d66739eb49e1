use fluent_collection::collection;
use fluent_collection::collection::Collection;
use fluent_collection::common::{Key, Value};
use fluent_collection::errors::ErrorKind;
use fluent_collection::val;
use fluent_collection_int_test::test_util::{create_test_context, run_test};

#[test]
fn test_is_empty_iff_count_is_zero() {
    run_test(create_test_context, |ctx| {
        let mut collections = vec![Collection::new(), ctx.numbers(), ctx.people()];
        let mut drained = ctx.numbers();
        while drained.pop().is_some() {}
        collections.push(drained);

        for collection in collections {
            assert_eq!(collection.is_empty(), collection.count() == 0);
            assert_eq!(collection.is_not_empty(), collection.count() != 0);
        }
        Ok(())
    })
}

#[test]
fn test_make_wraps_bare_values() {
    run_test(create_test_context, |_ctx| {
        for value in [val!(42), val!("x"), val!(false), val!(2.5), Value::Null] {
            let collection = Collection::make(value.clone());
            assert_eq!(collection.count(), 1);
            assert_eq!(collection.first(), Some(&value));
            assert_eq!(collection.get(0)?, &value);
        }
        Ok(())
    })
}

#[test]
fn test_push_pop_inverse_on_tail() {
    run_test(create_test_context, |ctx| {
        for mut collection in [Collection::new(), ctx.numbers(), ctx.people()] {
            let size = collection.count();
            let popped = collection.push("tail").pop();
            assert_eq!(popped, Some(val!("tail")));
            assert_eq!(collection.count(), size);
        }
        Ok(())
    })
}

#[test]
fn test_shift_removes_first_and_reindexes() {
    run_test(create_test_context, |_ctx| {
        let mut collection = collection!["a", "b", "c"];
        assert_eq!(collection.shift(), Some(val!("a")));
        assert_eq!(collection.first(), Some(&val!("b")));
        assert_eq!(collection.get(0)?, &val!("b"));
        assert_eq!(collection.get(1)?, &val!("c"));
        assert_eq!(collection.count(), 2);
        Ok(())
    })
}

#[test]
fn test_shift_keeps_named_keys() {
    run_test(create_test_context, |_ctx| {
        let mut collection = collection! { first: 1, label: "x" };
        collection.push(2).push(3);

        assert_eq!(collection.shift(), Some(val!(1)));
        assert_eq!(
            collection.keys().cloned().collect::<Vec<_>>(),
            vec![Key::from("label"), Key::Index(0), Key::Index(1)]
        );
        Ok(())
    })
}

#[test]
fn test_empty_queries_return_none_but_get_fails() {
    run_test(create_test_context, |_ctx| {
        let mut empty = Collection::new();
        assert!(empty.first().is_none());
        assert!(empty.last().is_none());
        assert!(empty.pop().is_none());
        assert!(empty.shift().is_none());

        let err = empty.get(0).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::KeyNotFound);
        Ok(())
    })
}

#[test]
fn test_container_protocol() {
    run_test(create_test_context, |_ctx| {
        let mut collection = Collection::new();
        collection.set("name", "Ann").set(10, "ten");

        assert!(collection.has("name"));
        assert!(collection.has("10"));
        assert_eq!(collection.get("name")?, &val!("Ann"));
        assert_eq!(collection.count(), 2);

        assert_eq!(collection.remove("name"), Some(val!("Ann")));
        assert!(!collection.has("name"));
        assert_eq!(collection.get("name").unwrap_err().kind(), &ErrorKind::KeyNotFound);

        collection.add("eleven");
        assert_eq!(collection.get(11)?, &val!("eleven"));
        Ok(())
    })
}
