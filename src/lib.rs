//! `j1939-relay-bus`: bit-exact frame codec and fixed-capacity dispatch table
//! for a SAE J1939-style heavy-duty vehicle bus layered over an extended
//! 29-bit CAN identifier. The crate exposes the low-level bit/signal codec,
//! the PGN/CAN-ID identifier codec, a pair of reference message descriptors,
//! and a fixed 8-slot dispatch registry.
#![no_std]
//==================================================================================
/// Shared constants and errors used across the codec and dispatch layers.
pub mod error;
/// Low-level bit and signal codec: the bit-window primitives and the typed
/// signal wrappers built on top of them.
pub mod infra;
/// NMEA2000/J1939-style protocol surface: CAN frame representation, the
/// PGN/CAN-ID identifier codec, message descriptors, and the dispatch table.
pub mod protocol;

pub use error::{BitError, CanIdBuildError, DispatchError, SignalError};
pub use infra::codec::bits::{array_shift, inject, project};
pub use infra::codec::signal::{decode_int, decode_scaled, decode_str, decode_uint};
pub use infra::codec::signal::{encode_int, encode_scaled, encode_str, encode_uint};
pub use protocol::dispatch::{AddressFilter, Dispatcher, ANY_ADDRESS, BROADCAST_ADDRESS};
pub use protocol::frame::CanFrame;
pub use protocol::identifier::{
    can_id_to_dest, can_id_to_pgn, can_id_to_priority, can_id_to_src, pgn_to_can_id, CanId,
    CanIdBuilder, EXTENDED_FRAME_FLAG, EXTENDED_ID_MASK,
};
pub use protocol::messages::{NodeInfo, RelayCommand};
//==================================================================================
