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
use crate::frame::{NegotiationVerb, TelnetCommand};
use bytes::BytesMut;

///
/// `TelnetEvent` is a decoded, complete protocol element produced by
/// [`TelnetCodec`](crate::TelnetCodec).
///
/// The decoder never emits an event for a partially received command;
/// whatever state is needed to finish one is carried across input chunks.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TelnetEvent {
    /// A run of plain data bytes, with escaped IACs already unfolded to
    /// literal 0xFF bytes. Runs are flushed at the next command boundary or
    /// at the end of the currently available input, whichever comes first.
    Data(BytesMut),
    /// A bare two-byte command such as NOP or GA.
    Command(TelnetCommand),
    /// An option negotiation command: `IAC <verb> <option>`.
    Negotiate(NegotiationVerb, TelnetOption),
    /// A complete subnegotiation block. The payload excludes the option byte
    /// and has doubled IACs unfolded.
    Subnegotiate(TelnetOption, BytesMut),
}
