//! Tests for the authentication service

mod mocks;
