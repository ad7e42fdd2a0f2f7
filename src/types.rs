// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! Core types shared by every codec.
//!
//! # The 64-bit state contract
//!
//! Every codec threads its entire resumable position through a
//! [`CharsetState`], two 32-bit words owned by the caller. Feeding the state
//! together with the next unit of input is sufficient to produce all
//! derivable output and the successor state; the library keeps no state of
//! its own between calls. The words are opaque to callers (the bit
//! layouts are private to each codec), but the pair is `Copy`, so a state
//! can be snapshotted, persisted (both words together) and resumed at any
//! unit boundary.
//!
//! # Emit callbacks
//!
//! Decoders push scalar values and encoders push bytes through an emit
//! closure, synchronously and one unit at a time. A decoder may legitimately
//! emit more than one unit per input byte: UTF-8 fed `E1 80` and then `FE`
//! owes the caller two error marks, one for the truncated sequence and one
//! for the impossible byte.

use crate::charset::Charset;
use crate::codec::{big5, cp949, shift_jis};
use crate::codec::{euc, hz, iso2022, iso2022_subset, sbcs, utf_16, utf_7, utf_8};
use crate::index::singlebyte::SbcsTable;

/// The in-band decode error mark: a permanent Unicode non-character, so it
/// can never collide with a real translation.
pub const ERROR: u32 = 0xFFFF;

/// Opaque per-conversion codec state; see the module documentation.
///
/// The zero value is the initial state for every codec, in both directions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CharsetState {
    pub s0: u32,
    pub s1: u32,
}

impl CharsetState {
    /// The initial state.
    pub const fn new() -> CharsetState {
        CharsetState { s0: 0, s1: 0 }
    }
}

/// Scalar values emitted by a decoder.
pub type EmitWide<'a> = dyn FnMut(u32) + 'a;

/// Bytes emitted by an encoder.
pub type EmitByte<'a> = dyn FnMut(u8) + 'a;

/// The per-encoding codec selector plus its parameter record.
///
/// This is the tagged-variant equivalent of a function-pointer descriptor:
/// each variant names the parameter block its codec needs, and `read`/`write`
/// below select the implementation by match.
pub(crate) enum CodecKind {
    Sbcs(&'static SbcsTable),
    Utf8,
    Utf16(&'static utf_16::Utf16Params),
    Utf7 { conservative: bool },
    Euc(&'static euc::EucParams),
    Hz,
    ShiftJis,
    Big5,
    Cp949,
    Iso2022Subset(&'static iso2022_subset::Iso2022Subset),
    Iso2022(&'static iso2022::Iso2022Mode),
}

/// A static codec descriptor: the charset identifier bound to its codec.
/// These live in read-only storage (`crate::all`) for the whole process.
pub(crate) struct CodecSpec {
    pub charset: Charset,
    pub kind: CodecKind,
}

impl CodecSpec {
    /// Decodes one byte, pushing zero or more scalar values. Malformed
    /// input emits [`ERROR`] in place; this operation never fails.
    pub fn read(&self, b: u8, state: &mut CharsetState, emit: &mut EmitWide) {
        match self.kind {
            CodecKind::Sbcs(table) => sbcs::read(table, b, emit),
            CodecKind::Utf8 => utf_8::read(b, state, emit),
            CodecKind::Utf16(params) => utf_16::read(params, b, state, emit),
            CodecKind::Utf7 { .. } => utf_7::read(b, state, emit),
            CodecKind::Euc(params) => euc::read(params, b, state, emit),
            CodecKind::Hz => hz::read(b, state, emit),
            CodecKind::ShiftJis => shift_jis::read(b, state, emit),
            CodecKind::Big5 => big5::read(b, state, emit),
            CodecKind::Cp949 => cp949::read(b, state, emit),
            CodecKind::Iso2022Subset(subset) => iso2022_subset::read(subset, b, state, emit),
            CodecKind::Iso2022(mode) => iso2022::read(mode, b, state, emit),
        }
    }

    /// Encodes one scalar value. Returns false, without emitting anything,
    /// when the scalar is not representable.
    pub fn write(&self, ch: u32, state: &mut CharsetState, emit: &mut EmitByte) -> bool {
        match self.kind {
            CodecKind::Sbcs(table) => sbcs::write(table, ch, emit),
            CodecKind::Utf8 => utf_8::write(ch, emit),
            CodecKind::Utf16(params) => utf_16::write(params, ch, state, emit),
            CodecKind::Utf7 { conservative } => utf_7::write(conservative, ch, state, emit),
            CodecKind::Euc(params) => euc::write(params, ch, emit),
            CodecKind::Hz => hz::write(ch, state, emit),
            CodecKind::ShiftJis => shift_jis::write(ch, emit),
            CodecKind::Big5 => big5::write(ch, emit),
            CodecKind::Cp949 => cp949::write(ch, emit),
            CodecKind::Iso2022Subset(subset) => iso2022_subset::write(subset, ch, state, emit),
            CodecKind::Iso2022(mode) => iso2022::write(mode, ch, state, emit),
        }
    }

    /// Finalises an output stream: emits whatever bytes return the encoding
    /// to its default mode and resets the state to its initial value, so
    /// the next scalar is encoded exactly as by a fresh encoder.
    pub fn finish(&self, state: &mut CharsetState, emit: &mut EmitByte) {
        match self.kind {
            CodecKind::Utf7 { .. } => utf_7::finish(state, emit),
            CodecKind::Hz => hz::finish(state, emit),
            CodecKind::Iso2022Subset(subset) => iso2022_subset::finish(subset, state, emit),
            CodecKind::Iso2022(mode) => iso2022::finish(mode, state, emit),
            _ => {}
        }
        *state = CharsetState::new();
    }
}
