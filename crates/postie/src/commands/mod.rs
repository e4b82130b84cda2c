//! CLI command implementations.

pub(crate) mod oschina;

pub(crate) use oschina::OschinaArgs;
