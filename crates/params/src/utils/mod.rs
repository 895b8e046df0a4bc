//! Constant groups by primitive family

pub mod hash;
