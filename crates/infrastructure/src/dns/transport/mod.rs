pub mod https;

pub use https::JsonHttpsResolver;
