mod aggregate_test;
mod callback_test;
mod mutation_test;
mod transform_test;
