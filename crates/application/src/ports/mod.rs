mod json_resolver;

pub use json_resolver::JsonResolver;
