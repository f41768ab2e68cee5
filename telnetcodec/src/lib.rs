//
// Copyright 2026 The netterm Authors. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! # Netterm Telnet Protocol Codec
//!
//! Client-side Telnet protocol core: byte-stream framing per RFC 854 plus
//! option negotiation for the handful of options an interactive terminal
//! client needs. Designed to run under Tokio through
//! `tokio_util::codec::Framed`.
//!
//! ## Layering
//!
//! The crate splits the protocol into three layers that the caller wires
//! together:
//!
//! - [`TelnetCodec`] turns raw octets into [`TelnetEvent`]s and writes
//!   [`TelnetFrame`]s back out. It handles IAC escaping and subnegotiation
//!   framing and nothing else; it holds no option state.
//! - [`NegotiationEngine`] consumes `Negotiate` and `Subnegotiate` events
//!   and produces reply frames plus [`OptionStatus`] transitions, guided by
//!   a pluggable [`NegotiationPolicy`]. The stock [`DefaultPolicy`] enables
//!   server echo, SUPPRESS-GO-AHEAD both ways, and answers NAWS,
//!   TERMINAL-TYPE and NEW-ENVIRON requests.
//! - [`WindowSizeSync`] tracks the local terminal size and emits NAWS
//!   subnegotiation frames whenever both a size is known and the peer has
//!   accepted the option.
//!
//! ## Wire format
//!
//! All commands start with IAC (0xFF):
//!
//! - 2-byte commands: `IAC <command>`
//! - 3-byte negotiation: `IAC <DO|DONT|WILL|WONT> <option>`
//! - Subnegotiation: `IAC SB <option> <data...> IAC SE`
//!
//! A literal 0xFF data byte travels as `IAC IAC`, in data and inside
//! subnegotiation payloads alike; the codec escapes on encode and unescapes
//! on decode so callers only ever see literal bytes.
//!
//! ## Usage Example
//!
//! ```rust
//! use netterm_telnetcodec::{NegotiationEngine, TelnetCodec, TelnetEvent};
//! use tokio_util::codec::{Decoder, Encoder};
//! use bytes::BytesMut;
//!
//! # fn example() -> Result<(), netterm_telnetcodec::CodecError> {
//! let mut codec = TelnetCodec::new();
//! let mut engine = NegotiationEngine::new();
//!
//! // Data + DO NAWS from the server.
//! let mut input = BytesMut::from(&b"login: \xFF\xFD\x1F"[..]);
//! let mut output = BytesMut::new();
//! while let Some(event) = codec.decode(&mut input)? {
//!     match event {
//!         TelnetEvent::Data(run) => print!("{}", String::from_utf8_lossy(&run)),
//!         TelnetEvent::Negotiate(verb, option) => {
//!             let reaction = engine.receive(verb, option);
//!             if let Some(reply) = reaction.reply {
//!                 codec.encode(reply, &mut output)?;
//!             }
//!         }
//!         _ => {}
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Related RFCs
//!
//! - RFC 854: Telnet Protocol Specification
//! - RFC 855: Telnet Option Specifications
//! - RFC 857: Telnet Echo Option
//! - RFC 858: Telnet Suppress Go Ahead Option
//! - RFC 1073: Telnet Window Size Option
//! - RFC 1091: Telnet Terminal-Type Option
//! - RFC 1572: Telnet Environment Option

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod args;
mod codec;
mod consts;
mod event;
mod frame;
mod options;
mod result;
mod window;

pub use self::args::{environ, naws, ttype};
pub use self::codec::TelnetCodec;
pub use self::event::TelnetEvent;
pub use self::frame::{NegotiationVerb, TelnetCommand, TelnetFrame};
pub use self::options::{
    Decision, DefaultPolicy, NegotiationEngine, NegotiationPolicy, NegotiationState, OptionStatus,
    Reaction, TelnetOption, TelnetSide,
};
pub use self::result::{CodecError, CodecResult};
pub use self::window::WindowSizeSync;
