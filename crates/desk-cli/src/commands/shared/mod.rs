pub mod notice;
pub mod parse;
pub mod view;
