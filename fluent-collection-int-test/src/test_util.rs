use fake::faker::name::en::Name;
use fake::Fake;
use fluent_collection::collection;
use fluent_collection::collection::Collection;
use fluent_collection::errors::CollectionResult;

/// Shared state handed to every integration test.
#[derive(Clone, Debug)]
pub struct TestContext {
    people: Collection,
    numbers: Collection,
}

impl TestContext {
    /// Records shaped `{ name, age }`.
    pub fn people(&self) -> Collection {
        self.people.clone()
    }

    /// `[1, 2, 3, 4]`.
    pub fn numbers(&self) -> Collection {
        self.numbers.clone()
    }

    /// Sum of the `age` field across [TestContext::people].
    pub fn total_age(&self) -> i64 {
        self.people.reduce(
            |total, person| {
                total
                    + person
                        .field(&"age".into())
                        .and_then(|age| age.as_int())
                        .unwrap_or(0)
            },
            0,
        )
    }
}

/// Builds a context with `count` randomly generated people.
pub fn create_test_context_with(count: usize) -> CollectionResult<TestContext> {
    let mut people = Collection::new();
    for _ in 0..count {
        let name: String = Name().fake();
        let age: i64 = (18..90).fake();
        people.push(collection! { name: name, age: age });
    }

    Ok(TestContext {
        people,
        numbers: collection![1, 2, 3, 4],
    })
}

pub fn create_test_context() -> CollectionResult<TestContext> {
    create_test_context_with(25)
}

/// Runs `test` against a fresh context, failing with the full error chain
/// and backtrace if setup or the test body returns an error.
pub fn run_test<B, T>(before: B, test: T)
where
    B: Fn() -> CollectionResult<TestContext>,
    T: Fn(TestContext) -> CollectionResult<()>,
{
    let ctx = match before() {
        Ok(ctx) => ctx,
        Err(e) => panic!("Before run failed: {:?}", e),
    };

    log::debug!("Running test with {} people", ctx.people.count());
    if let Err(e) = test(ctx) {
        panic!("Test failed: {:?}", e);
    }
}
