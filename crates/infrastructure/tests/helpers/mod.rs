#![allow(unused_imports)]
mod builders;
mod json_server_mock;
mod mock_resolver;

pub use builders::*;
pub use json_server_mock::MockJsonServer;
pub use mock_resolver::MockJsonResolver;
