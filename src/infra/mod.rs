//! Infrastructure layer: the bit-level and signal-level codec shared by
//! every message descriptor. Nothing in this module knows about PGNs,
//! CAN identifiers, or dispatch — it only understands bit windows inside
//! an 8-byte buffer.
pub mod codec;
