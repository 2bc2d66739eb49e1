use fluent_collection::collection;
use fluent_collection::collection::Collection;
use fluent_collection::common::{Key, Value};
use fluent_collection::val;
use fluent_collection_int_test::test_util::{create_test_context, run_test};

#[test]
fn test_map_preserves_size_and_keys() {
    run_test(create_test_context, |ctx| {
        let mut source = ctx.numbers();
        source.set("named", 10);

        let square = |v: &Value| v.as_int().map(|n| n * n);
        let mapped = source.map(square);

        assert_eq!(mapped.count(), source.count());
        for (key, value) in &source {
            assert_eq!(mapped.get(key)?, &Value::from(square(value)));
        }
        assert_eq!(source.get("named")?, &val!(10));
        Ok(())
    })
}

#[test]
fn test_filter_keeps_original_keys() {
    run_test(create_test_context, |ctx| {
        let numbers = ctx.numbers();
        let odd = numbers.filter(|v| v.as_int().map_or(false, |n| n % 2 == 1));
        assert_eq!(
            odd.keys().cloned().collect::<Vec<_>>(),
            vec![Key::Index(0), Key::Index(2)]
        );
        assert_eq!(numbers.count(), 4);
        Ok(())
    })
}

#[test]
fn test_filter_plus_reject_is_everything() {
    run_test(create_test_context, |ctx| {
        let people = ctx.people();
        let adult = |person: &Value| {
            person
                .field(&Key::from("age"))
                .and_then(Value::as_int)
                .map_or(false, |age| age >= 40)
        };
        let kept = people.filter(adult);
        let rejected = people.reject(adult);
        assert_eq!(kept.count() + rejected.count(), people.count());
        assert!(kept.every(adult));
        assert!(!rejected.values().any(adult));
        Ok(())
    })
}

#[test]
fn test_with_key_variants() {
    run_test(create_test_context, |_ctx| {
        let collection = collection! { a: 1, b: 2, c: 3 };
        let not_b = collection.reject_with_key(|_, k| k == &Key::from("b"));
        assert_eq!(not_b, collection! { a: 1, c: 3 });

        let only_b = collection.filter_with_key(|_, k| k == &Key::from("b"));
        assert_eq!(only_b, collection! { b: 2 });

        assert!(collection.every_with_key(|_, k| k.is_name()));
        Ok(())
    })
}

#[test]
fn test_every() {
    run_test(create_test_context, |_ctx| {
        assert!(collection![1, 2, 3].every(Value::is_int));
        assert!(!collection![1, "two", 3].every(Value::is_int));
        Ok(())
    })
}

#[test]
fn test_flatten_recursive_and_ordered() {
    run_test(create_test_context, |_ctx| {
        let flat = collection![[1], [2, [3]]].flatten();
        assert_eq!(flat.to_array(), collection![1, 2, 3].to_array());

        let mut mixed = Collection::new();
        mixed
            .push(collection! { a: [1, { b: 2 }] })
            .set("tail", 3)
            .push(Collection::make(vec![4, 5]));
        assert_eq!(mixed.flatten(), collection![1, 2, 3, 4, 5]);
        Ok(())
    })
}

#[test]
fn test_each_is_side_effect_only() {
    run_test(create_test_context, |ctx| {
        let numbers = ctx.numbers();
        let mut visited = Vec::new();
        numbers
            .each(|v| visited.push(v.clone()))
            .each_with_key(|_, k| visited.push(Value::from(k)));
        assert_eq!(visited.len(), 8);
        assert_eq!(numbers, ctx.numbers());
        Ok(())
    })
}
