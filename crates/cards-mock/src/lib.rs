//! Scripted mock source for contributor-cards tests
//!
//! Provides an in-memory implementation of the `ContributorSource` trait so
//! tests never make real HTTP requests, including the fetch the widget
//! fires unconditionally at start-up. Responses are scripted in order, each
//! optionally with an artificial latency, which is what makes the
//! out-of-order completion race reproducible under test.

mod source;

pub use source::{contributor, MockSource, RecordedCall};
