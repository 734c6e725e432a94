#![allow(missing_docs)]

pub(crate) mod http;

pub(crate) use http::{assert_status, into_json};
