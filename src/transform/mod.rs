pub mod body;
pub mod key;

pub use body::{MAX_DEPTH, keys_to_camel, keys_to_snake};
pub use key::{camel_to_snake, snake_to_camel};
