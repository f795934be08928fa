#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

pub mod error;
pub mod modular;

mod element;

pub use crate::{
    element::FieldElement,
    error::{Error, Result},
    modular::{add_mod, divide_mod, inverse_mod, mul_mod, neg_mod, pow_mod, reduce, sub_mod},
};
