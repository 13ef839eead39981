//! Evaluator tests, one file per operator family.

mod cast_tests;
