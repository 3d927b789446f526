//! Bit and signal codec. `bits` provides the raw bit-window primitives
//! (`array_shift`, `project`, `inject`); `signal` layers typed integer and
//! string encoding on top of them.
pub mod bits;
pub mod signal;
