#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use rc_codec as codec;
pub use rc_utils as utils;
