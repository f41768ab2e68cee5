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

//! Telnet wire constants from [RFC 854](https://tools.ietf.org/html/rfc854)
//! and the option RFCs this crate implements.

/// Interpret As Command - escape byte introducing every Telnet command
pub const IAC: u8 = 255;

/// Subnegotiation End
pub const SE: u8 = 240;
/// No Operation
pub const NOP: u8 = 241;
/// Data Mark - end of urgent data stream
pub const DM: u8 = 242;
/// Break
pub const BRK: u8 = 243;
/// Interrupt Process
pub const IP: u8 = 244;
/// Abort Output
pub const AO: u8 = 245;
/// Are You There
pub const AYT: u8 = 246;
/// Erase Character
pub const EC: u8 = 247;
/// Erase Line
pub const EL: u8 = 248;
/// Go Ahead
pub const GA: u8 = 249;
/// Subnegotiation Begin
pub const SB: u8 = 250;
/// Option negotiation: sender wants to enable an option locally
pub const WILL: u8 = 251;
/// Option negotiation: sender refuses or disables an option locally
pub const WONT: u8 = 252;
/// Option negotiation: sender asks the peer to enable an option
pub const DO: u8 = 253;
/// Option negotiation: sender asks the peer to disable an option
pub const DONT: u8 = 254;

/// Carriage Return
pub const CR: u8 = b'\r';
/// Line Feed
pub const LF: u8 = b'\n';

/// Telnet option codes, per the
/// [IANA registry](https://www.iana.org/assignments/telnet-options/telnet-options.xhtml).
pub mod option {
    /// Echo [RFC857](https://tools.ietf.org/html/rfc857)
    pub const ECHO: u8 = 1;
    /// Suppress Go Ahead [RFC858](https://tools.ietf.org/html/rfc858)
    pub const SGA: u8 = 3;
    /// Terminal Type [RFC1091](https://tools.ietf.org/html/rfc1091)
    pub const TTYPE: u8 = 24;
    /// Negotiate About Window Size [RFC1073](https://tools.ietf.org/html/rfc1073)
    pub const NAWS: u8 = 31;
    /// New Environment [RFC1572](https://tools.ietf.org/html/rfc1572)
    pub const NEW_ENVIRON: u8 = 39;
}

/// Subnegotiation sub-codes shared by TERMINAL-TYPE and NEW-ENVIRON.
pub mod subneg {
    /// "Here is my value" - first byte of a reply payload
    pub const IS: u8 = 0;
    /// "Send me your value" - first byte of a request payload
    pub const SEND: u8 = 1;
}
