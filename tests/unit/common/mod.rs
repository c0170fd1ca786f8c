//! Shared test utilities


pub use mocks::StubHost;
