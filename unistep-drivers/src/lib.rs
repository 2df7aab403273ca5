//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in unistep-hal:
//!
//! - Output ports built from individual GPIO lines (ULN2003-style
//!   unipolar driver boards)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod port;
