//! Test utilities


pub(crate) use server::{StubResponse, StubServer};
