pub mod design;
pub mod filter;
pub mod response;
