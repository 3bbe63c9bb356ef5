//! Browser-level checks against a running `web` dev server.

pub mod browser;
pub mod test_server;
