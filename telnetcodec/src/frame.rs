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

use crate::TelnetOption;
use crate::consts;
use bytes::BytesMut;
use std::fmt::Formatter;

/// A bare two-byte Telnet command (`IAC <command>`), carrying no option byte.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TelnetCommand {
    /// No Operation
    NoOperation,
    /// End of urgent data stream
    DataMark,
    /// Operator pressed the Break or Attention key
    Break,
    /// Interrupt the current process
    InterruptProcess,
    /// Cancel output from the current process
    AbortOutput,
    /// Request acknowledgment
    AreYouThere,
    /// Request that the previous character be erased
    EraseCharacter,
    /// Request that the previous line be erased
    EraseLine,
    /// End of input for half-duplex connections
    GoAhead,
}

impl TelnetCommand {
    /// Maps a command byte to a `TelnetCommand`, or `None` for bytes that are
    /// not bare commands (negotiation verbs, SB/SE, and unassigned values).
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            consts::NOP => Some(TelnetCommand::NoOperation),
            consts::DM => Some(TelnetCommand::DataMark),
            consts::BRK => Some(TelnetCommand::Break),
            consts::IP => Some(TelnetCommand::InterruptProcess),
            consts::AO => Some(TelnetCommand::AbortOutput),
            consts::AYT => Some(TelnetCommand::AreYouThere),
            consts::EC => Some(TelnetCommand::EraseCharacter),
            consts::EL => Some(TelnetCommand::EraseLine),
            consts::GA => Some(TelnetCommand::GoAhead),
            _ => None,
        }
    }

    /// The wire byte for this command.
    pub fn to_u8(self) -> u8 {
        match self {
            TelnetCommand::NoOperation => consts::NOP,
            TelnetCommand::DataMark => consts::DM,
            TelnetCommand::Break => consts::BRK,
            TelnetCommand::InterruptProcess => consts::IP,
            TelnetCommand::AbortOutput => consts::AO,
            TelnetCommand::AreYouThere => consts::AYT,
            TelnetCommand::EraseCharacter => consts::EC,
            TelnetCommand::EraseLine => consts::EL,
            TelnetCommand::GoAhead => consts::GA,
        }
    }
}

/// One of the four option-negotiation verbs.
///
/// `Do`/`Dont` ask the peer to enable or disable an option on *their* side;
/// `Will`/`Wont` announce or refuse an option on the *sender's* side.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NegotiationVerb {
    /// `IAC DO <option>`
    Do,
    /// `IAC DONT <option>`
    Dont,
    /// `IAC WILL <option>`
    Will,
    /// `IAC WONT <option>`
    Wont,
}

impl NegotiationVerb {
    /// Maps a command byte to a negotiation verb, or `None` for any other byte.
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            consts::DO => Some(NegotiationVerb::Do),
            consts::DONT => Some(NegotiationVerb::Dont),
            consts::WILL => Some(NegotiationVerb::Will),
            consts::WONT => Some(NegotiationVerb::Wont),
            _ => None,
        }
    }

    /// The wire byte for this verb.
    pub fn to_u8(self) -> u8 {
        match self {
            NegotiationVerb::Do => consts::DO,
            NegotiationVerb::Dont => consts::DONT,
            NegotiationVerb::Will => consts::WILL,
            NegotiationVerb::Wont => consts::WONT,
        }
    }
}

impl std::fmt::Display for NegotiationVerb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NegotiationVerb::Do => write!(f, "DO"),
            NegotiationVerb::Dont => write!(f, "DONT"),
            NegotiationVerb::Will => write!(f, "WILL"),
            NegotiationVerb::Wont => write!(f, "WONT"),
        }
    }
}

///
/// An outgoing Telnet frame, encoded onto the wire by
/// [`TelnetCodec`](crate::TelnetCodec).
///
/// `Data` payloads and subnegotiation payloads are IAC-escaped during
/// encoding; callers hand over literal bytes.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TelnetFrame {
    /// Plain data bytes
    Data(BytesMut),
    /// A bare two-byte command
    Command(TelnetCommand),
    /// `IAC DO <option>`
    Do(TelnetOption),
    /// `IAC DONT <option>`
    Dont(TelnetOption),
    /// `IAC WILL <option>`
    Will(TelnetOption),
    /// `IAC WONT <option>`
    Wont(TelnetOption),
    /// `IAC SB <option> <payload> IAC SE`
    Subnegotiate(TelnetOption, BytesMut),
}

impl TelnetFrame {
    /// Convenience constructor wrapping a byte slice as a data frame.
    pub fn data(bytes: &[u8]) -> Self {
        TelnetFrame::Data(BytesMut::from(bytes))
    }
}
