#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic)]
#![warn(clippy::integer_division_remainder_used)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

mod encoding {
    pub mod base57;
    pub mod crockford;
    pub mod front_pad;
    pub mod text;
}
pub mod result;
pub mod utils;

pub use encoding::{base57, crockford, front_pad, text};
