pub mod err;
pub mod parse_err;
