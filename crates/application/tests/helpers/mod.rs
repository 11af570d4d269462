#![allow(dead_code)]

mod mock_redirect;

pub use mock_redirect::{MockRetryTimer, MockUrlProbe};
