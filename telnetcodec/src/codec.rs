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

use crate::frame::{NegotiationVerb, TelnetCommand, TelnetFrame};
use crate::{CodecError, TelnetEvent, TelnetOption, consts};
use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::warn;

///
/// Splits the raw Telnet octet stream into [`TelnetEvent`]s and writes
/// [`TelnetFrame`]s back out, handling IAC escaping in both directions.
///
/// The codec is purely a framing layer: it holds no negotiation state and
/// emits negotiation commands as events for the
/// [`NegotiationEngine`](crate::NegotiationEngine) to interpret. Decoder
/// state survives arbitrary chunking of the input; a command split across
/// two reads is finished when the rest arrives.
///
/// Typically used through `tokio_util::codec::Framed` over a `TcpStream`.
///
#[derive(Debug, Default)]
pub struct TelnetCodec {
    decoder_state: DecoderState,
    subneg_buffer: BytesMut,
}

impl TelnetCodec {
    /// Creates a codec in the normal-data state with an empty
    /// subnegotiation buffer.
    pub fn new() -> TelnetCodec {
        TelnetCodec::default()
    }
}

impl Decoder for TelnetCodec {
    type Item = TelnetEvent;
    type Error = CodecError;

    /// Decodes the next complete event from `src`, or `Ok(None)` when more
    /// input is needed.
    ///
    /// Plain data is emitted as a run covering everything up to the next
    /// IAC or the end of the available input, so a stretch of text costs one
    /// event rather than one per byte while never buffering beyond the
    /// current chunk.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Subnegotiation`] when an IAC inside an
    /// `SB ... SE` block is followed by anything other than `SE` or a second
    /// IAC. That stream can no longer be framed trustworthily; the caller is
    /// expected to drop the connection.
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<TelnetEvent>, Self::Error> {
        while !src.is_empty() {
            match self.decoder_state {
                DecoderState::NormalData => {
                    match src.iter().position(|&byte| byte == consts::IAC) {
                        Some(0) => {
                            src.advance(1);
                            self.decoder_state = DecoderState::InterpretAsCommand;
                        }
                        Some(n) => {
                            let run = src.split_to(n);
                            src.advance(1);
                            self.decoder_state = DecoderState::InterpretAsCommand;
                            return Ok(Some(TelnetEvent::Data(run)));
                        }
                        None => {
                            let run = src.split_to(src.len());
                            return Ok(Some(TelnetEvent::Data(run)));
                        }
                    }
                }
                DecoderState::InterpretAsCommand => {
                    let byte = src.get_u8();
                    match byte {
                        consts::IAC => {
                            // Escaped literal 0xFF data byte.
                            self.decoder_state = DecoderState::NormalData;
                            return Ok(Some(TelnetEvent::Data(BytesMut::from(
                                &[consts::IAC][..],
                            ))));
                        }
                        consts::SB => {
                            self.decoder_state = DecoderState::Subnegotiate;
                        }
                        _ => {
                            if let Some(verb) = NegotiationVerb::from_u8(byte) {
                                self.decoder_state = DecoderState::Negotiate(verb);
                            } else if let Some(command) = TelnetCommand::from_u8(byte) {
                                self.decoder_state = DecoderState::NormalData;
                                return Ok(Some(TelnetEvent::Command(command)));
                            } else {
                                warn!("ignoring unknown command byte {:#04X}", byte);
                                self.decoder_state = DecoderState::NormalData;
                            }
                        }
                    }
                }
                DecoderState::Negotiate(verb) => {
                    let option = TelnetOption::from_u8(src.get_u8());
                    self.decoder_state = DecoderState::NormalData;
                    return Ok(Some(TelnetEvent::Negotiate(verb, option)));
                }
                DecoderState::Subnegotiate => {
                    let option = src.get_u8();
                    self.decoder_state = DecoderState::SubnegotiateArgument(option);
                }
                DecoderState::SubnegotiateArgument(option) => {
                    let byte = src.get_u8();
                    if byte == consts::IAC {
                        self.decoder_state = DecoderState::SubnegotiateArgumentIac(option);
                    } else {
                        self.subneg_buffer.put_u8(byte);
                    }
                }
                DecoderState::SubnegotiateArgumentIac(option) => {
                    let byte = src.get_u8();
                    match byte {
                        consts::SE => {
                            self.decoder_state = DecoderState::NormalData;
                            let payload = self.subneg_buffer.split();
                            return Ok(Some(TelnetEvent::Subnegotiate(
                                TelnetOption::from_u8(option),
                                payload,
                            )));
                        }
                        consts::IAC => {
                            self.subneg_buffer.put_u8(consts::IAC);
                            self.decoder_state = DecoderState::SubnegotiateArgument(option);
                        }
                        byte => {
                            self.decoder_state = DecoderState::NormalData;
                            self.subneg_buffer.clear();
                            return Err(CodecError::Subnegotiation { option, byte });
                        }
                    }
                }
            }
        }
        Ok(None)
    }
}

impl Encoder<TelnetFrame> for TelnetCodec {
    type Error = CodecError;

    /// Encodes a frame onto the wire, doubling any 0xFF byte inside data and
    /// subnegotiation payloads.
    fn encode(&mut self, item: TelnetFrame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        match item {
            TelnetFrame::Data(payload) => {
                dst.reserve(payload.len());
                put_escaped(dst, &payload);
            }
            TelnetFrame::Command(command) => {
                dst.reserve(2);
                dst.put_u8(consts::IAC);
                dst.put_u8(command.to_u8());
            }
            TelnetFrame::Do(option) => put_negotiation(dst, consts::DO, option),
            TelnetFrame::Dont(option) => put_negotiation(dst, consts::DONT, option),
            TelnetFrame::Will(option) => put_negotiation(dst, consts::WILL, option),
            TelnetFrame::Wont(option) => put_negotiation(dst, consts::WONT, option),
            TelnetFrame::Subnegotiate(option, payload) => {
                dst.reserve(5 + payload.len());
                dst.put_u8(consts::IAC);
                dst.put_u8(consts::SB);
                dst.put_u8(option.to_u8());
                put_escaped(dst, &payload);
                dst.put_u8(consts::IAC);
                dst.put_u8(consts::SE);
            }
        }
        Ok(())
    }
}

fn put_negotiation(dst: &mut BytesMut, verb: u8, option: TelnetOption) {
    dst.reserve(3);
    dst.put_u8(consts::IAC);
    dst.put_u8(verb);
    dst.put_u8(option.to_u8());
}

fn put_escaped(dst: &mut BytesMut, payload: &[u8]) {
    for &byte in payload {
        if byte == consts::IAC {
            dst.put_u8(consts::IAC);
        }
        dst.put_u8(byte);
    }
}

/// Decoder state, carried across input chunks so a command split over two
/// reads is finished when the rest arrives.
#[derive(Clone, Copy, Debug, Default)]
enum DecoderState {
    /// Plain data until the next IAC
    #[default]
    NormalData,
    /// Seen IAC, next byte is a command
    InterpretAsCommand,
    /// Seen IAC + a negotiation verb, next byte is the option code
    Negotiate(NegotiationVerb),
    /// Seen IAC SB, next byte is the option code
    Subnegotiate,
    /// Accumulating subnegotiation payload for the given option
    SubnegotiateArgument(u8),
    /// Seen IAC inside a subnegotiation, next byte is SE or an escaped IAC
    SubnegotiateArgumentIac(u8),
}
