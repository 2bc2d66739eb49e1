use fluent_collection::collection;
use fluent_collection::collection::Collection;
use fluent_collection::common::Value;
use fluent_collection::val;
use fluent_collection_int_test::test_util::{create_test_context, create_test_context_with, run_test};

#[test]
fn test_reduce_left_fold() {
    run_test(create_test_context, |ctx| {
        let total = ctx.numbers().reduce(|acc, v| acc + v.as_int().unwrap_or(0), 0);
        assert_eq!(total, 10);

        let trace = ctx
            .numbers()
            .reduce(|acc: Vec<i64>, v| [acc, vec![v.as_int().unwrap_or(0)]].concat(), vec![]);
        assert_eq!(trace, vec![1, 2, 3, 4]);
        Ok(())
    })
}

#[test]
fn test_sum_numbers() {
    run_test(create_test_context, |_ctx| {
        assert_eq!(collection![1, 2, 3].sum(), val!(6));
        assert_eq!(collection![0.5, 0.25].sum(), val!(0.75));
        assert_eq!(Collection::new().sum(), val!(0));
        Ok(())
    })
}

#[test]
fn test_sum_by_field() {
    run_test(create_test_context, |_ctx| {
        let people = collection![{ age: 30 }, { age: 26 }, { age: 44 }];
        assert_eq!(people.sum_by("age"), val!(100));
        assert_eq!(people.sum_by("missing"), val!(0));
        Ok(())
    })
}

#[test]
fn test_sum_by_matches_manual_total() {
    run_test(
        || create_test_context_with(100),
        |ctx| {
            assert_eq!(ctx.people().sum_by("age"), Value::Int(ctx.total_age()));
            Ok(())
        },
    )
}

#[test]
fn test_implode_skips_non_scalars() {
    run_test(create_test_context, |_ctx| {
        assert_eq!(collection![1, "a", [2, 3]].implode(","), "1,a");
        assert_eq!(collection![(), true, "x", 1.5].implode(" "), "x 1.5");
        Ok(())
    })
}

#[test]
fn test_implode_names() {
    run_test(
        || create_test_context_with(3),
        |ctx| {
            let names = ctx
                .people()
                .map(|p| p.field(&"name".into()).cloned().unwrap_or_default());
            let joined = names.implode("|");
            assert_eq!(joined.split('|').count(), 3);
            Ok(())
        },
    )
}
