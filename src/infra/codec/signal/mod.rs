//! Typed signal codec layered on top of [`super::bits`]: unsigned and
//! signed integers up to 32 bits, fixed-length byte strings, and a
//! resolution-scaled floating point reading of either integer kind.
use crate::error::SignalError;
use crate::infra::codec::bits::{self, span_bytes};

const MAX_INT_WIDTH: usize = 32;

/// Width must be in `[1, 32]`; `start_bit + width` is allowed to exceed
/// 64 — that is exactly the near-end-of-payload case `encode_uint`/
/// `decode_uint` are required to clip rather than reject (see §7).
fn check_int_args(start_bit: usize, width: usize) -> Result<(), SignalError> {
    if width == 0 || width > MAX_INT_WIDTH {
        return Err(SignalError::InvalidArgs { start_bit, width });
    }
    Ok(())
}

fn check_str_args(start_bit: usize, width: usize) -> Result<usize, SignalError> {
    let invalid = width == 0
        || start_bit % 8 != 0
        || width % 8 != 0
        || width > 64
        || start_bit + width > 64;
    if invalid {
        return Err(SignalError::InvalidString { start_bit, width });
    }
    Ok(width / 8)
}

/// Decodes a `width`-bit (`width <= 32`) unsigned integer at `start_bit`.
/// The result is folded big-endian from the projected window and masked
/// to exactly `width` bits.
pub fn decode_uint(data: &[u8; 8], start_bit: usize, width: usize) -> Result<u32, SignalError> {
    check_int_args(start_bit, width)?;

    let r_bytes = span_bytes(start_bit, width).min(5);
    let mut window = [0u8; 5];
    bits::project(data, &mut window[..r_bytes], start_bit, width)
        .map_err(|_| SignalError::InvalidArgs { start_bit, width })?;

    let mut v: u32 = 0;
    for &byte in &window[..r_bytes] {
        v = (v << 8) | u32::from(byte);
    }
    if width < 32 {
        v &= (1u32 << width) - 1;
    }
    Ok(v)
}

/// Decodes a `width`-bit (`width <= 32`) two's-complement signed integer
/// at `start_bit`: decodes as unsigned, then sign-extends if the sign
/// bit (`width - 1`) is set. Width 0 yields 0 rather than an error,
/// matching the unsigned decode's leniency on this one path even though
/// encoding a width-0 signal is always rejected.
pub fn decode_int(data: &[u8; 8], start_bit: usize, width: usize) -> Result<i32, SignalError> {
    if width == 0 {
        return Ok(0);
    }
    let u = decode_uint(data, start_bit, width)?;
    if width == 32 {
        return Ok(u as i32);
    }
    let sign_mask = 1u32 << (width - 1);
    let v = if u & sign_mask != 0 {
        u | !((1u32 << width) - 1)
    } else {
        u
    };
    Ok(v as i32)
}

/// Encodes `n` into the `width`-bit window at `start_bit`, MSB-first,
/// masking `n` to its low `width` bits first — out-of-range values are
/// silently truncated rather than rejected, matching the decode
/// round-trip contract.
pub fn encode_uint(n: u32, data: &mut [u8; 8], start_bit: usize, width: usize) -> Result<(), SignalError> {
    check_int_args(start_bit, width)?;

    let n_bytes = ((width + 7) / 8).min(4);
    let masked = if width < 32 { n & ((1u32 << width) - 1) } else { n };

    let mut num = [0u8; 4];
    for (i, byte) in num[..n_bytes].iter_mut().enumerate() {
        let shift = 8 * (n_bytes - 1 - i);
        *byte = (masked >> shift) as u8;
    }

    bits::inject(data, &num[..n_bytes], start_bit, width)
        .map_err(|_| SignalError::InvalidArgs { start_bit, width })
}

/// Encodes `n` into the `width`-bit window as two's complement: for
/// `width == 32` the bits are reinterpreted directly, otherwise `n` is
/// masked to `width` bits before delegating to [`encode_uint`].
pub fn encode_int(n: i32, data: &mut [u8; 8], start_bit: usize, width: usize) -> Result<(), SignalError> {
    check_int_args(start_bit, width)?;

    let bits = if width == 32 {
        n as u32
    } else {
        (n as u32) & ((1u32 << width) - 1)
    };
    encode_uint(bits, data, start_bit, width)
}

/// Encodes `s` as a fixed `width`-bit (byte-aligned, `width` a non-zero
/// multiple of 8, `width <= 64`) byte string at `start_bit`. When
/// `zero_terminate` is set, reserves the last byte of the field for a
/// `0x00` terminator and copies at most `field_bytes - 1` bytes of `s`;
/// otherwise copies at most `field_bytes` bytes. The remainder of the
/// field is filled with `pad_byte`. Refuses (returns `Err`) rather than
/// truncating if the field would spill past byte 7 of the payload.
pub fn encode_str(
    s: &[u8],
    data: &mut [u8; 8],
    start_bit: usize,
    width: usize,
    zero_terminate: bool,
    pad_byte: u8,
) -> Result<(), SignalError> {
    let field_bytes = check_str_args(start_bit, width)?;

    let mut tmp = [pad_byte; 8];
    if zero_terminate {
        let to_copy = s.len().min(field_bytes - 1);
        tmp[..to_copy].copy_from_slice(&s[..to_copy]);
        tmp[to_copy] = 0x00;
    } else {
        let to_copy = s.len().min(field_bytes);
        tmp[..to_copy].copy_from_slice(&s[..to_copy]);
    }

    bits::inject(data, &tmp[..field_bytes], start_bit, width)
        .map_err(|_| SignalError::InvalidString { start_bit, width })
}

/// Decodes a fixed `width`-bit byte string at `start_bit` into `out`,
/// returning the number of bytes written. When `stop_at_zero` is set,
/// returns the prefix up to the first `0x00` byte (or the whole field if
/// none is found); otherwise returns the field with trailing `pad_byte`
/// bytes trimmed. `out` must be at least `width / 8` bytes long.
pub fn decode_str(
    data: &[u8; 8],
    start_bit: usize,
    width: usize,
    stop_at_zero: bool,
    pad_byte: u8,
    out: &mut [u8],
) -> Result<usize, SignalError> {
    let field_bytes = check_str_args(start_bit, width)?;
    if out.len() < field_bytes {
        return Err(SignalError::InvalidString { start_bit, width });
    }

    let mut tmp = [0u8; 8];
    bits::project(data, &mut tmp[..field_bytes], start_bit, width)
        .map_err(|_| SignalError::InvalidString { start_bit, width })?;

    let n = if stop_at_zero {
        tmp[..field_bytes].iter().position(|&b| b == 0x00).unwrap_or(field_bytes)
    } else {
        let mut n = field_bytes;
        while n > 0 && tmp[n - 1] == pad_byte {
            n -= 1;
        }
        n
    };

    out[..n].copy_from_slice(&tmp[..n]);
    Ok(n)
}

/// Decodes a `width`-bit integer (signed if `signed_`) and scales it by
/// `resolution` into a physical-unit `f64` — the resolution-scaled
/// reading every NMEA2000/J1939 signal table needs on top of the raw
/// integer codec.
pub fn decode_scaled(
    data: &[u8; 8],
    start_bit: usize,
    width: usize,
    signed_: bool,
    resolution: f64,
) -> Result<f64, SignalError> {
    let raw = if signed_ {
        f64::from(decode_int(data, start_bit, width)?)
    } else {
        f64::from(decode_uint(data, start_bit, width)?)
    };
    Ok(raw * resolution)
}

/// Inverse of [`decode_scaled`]: divides `value` by `resolution`,
/// truncates toward zero, and encodes the resulting integer.
pub fn encode_scaled(
    value: f64,
    data: &mut [u8; 8],
    start_bit: usize,
    width: usize,
    signed_: bool,
    resolution: f64,
) -> Result<(), SignalError> {
    let raw = value / resolution;
    if signed_ {
        encode_int(raw as i32, data, start_bit, width)
    } else {
        encode_uint(raw as u32, data, start_bit, width)
    }
}
