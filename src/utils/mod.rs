pub mod hash;
pub mod ip;
