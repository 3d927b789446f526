//! Error definitions shared across the codec and dispatch modules.
//! Each type models a specific failure scenario; none of them carry a
//! global error state, matching the "errors are values" design in the
//! protocol's error-handling contract.
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised by the bit-window primitives (`project`/`inject`).
pub enum BitError {
    /// `width == 0`, or the scratch/number buffer supplied to `inject` is empty.
    #[error("invalid arguments: width {width} starting at bit {start_bit}")]
    InvalidArgs {
        /// Requested window width in bits.
        width: usize,
        /// Requested window start bit.
        start_bit: usize,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised by the typed signal codec (`encode_*`/`decode_*`).
pub enum SignalError {
    /// Integer width outside `[1, 32]`, or `start_bit + width > 64`.
    #[error("invalid integer signal: start_bit {start_bit}, width {width}")]
    InvalidArgs {
        /// Requested signal start bit.
        start_bit: usize,
        /// Requested signal width in bits.
        width: usize,
    },
    /// A string signal violated its alignment or width preconditions:
    /// `start_bit` not byte-aligned, `width` not a non-zero multiple of
    /// eight, `width` outside `[8, 64]`, or the field would spill past the
    /// end of the 8-byte payload.
    #[error("invalid string signal: start_bit {start_bit}, width {width}")]
    InvalidString {
        /// Requested signal start bit.
        start_bit: usize,
        /// Requested signal width in bits.
        width: usize,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while building a 29-bit CAN identifier from a PGN.
pub enum CanIdBuildError {
    /// Attempt to build a PDU Format 2 (broadcast) identifier with a PGN
    /// whose PDU format byte is below `0xF0`.
    #[error("PGN {pgn:#08x} is PDU Format 1; it requires an explicit destination")]
    InvalidForBroadcast {
        /// The offending PGN.
        pgn: u32,
    },
    /// Attempt to build a PDU Format 1 (peer-to-peer) identifier with a PGN
    /// whose PDU format byte is `0xF0` or above.
    #[error("PGN {pgn:#08x} is PDU Format 2; it cannot take an explicit destination")]
    InvalidForPeerToPeer {
        /// The offending PGN.
        pgn: u32,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while registering descriptors into the dispatch table.
pub enum DispatchError {
    /// The registry has already reached its fixed capacity.
    #[error("dispatch table is full")]
    TableFull,
}
