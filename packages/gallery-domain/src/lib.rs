pub mod cursor;
pub mod predicate;
pub mod request;
