#![allow(dead_code)]

pub mod invoke_builder;
pub mod mock_host;
