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

//! Terminal Type [RFC1091](https://tools.ietf.org/html/rfc1091)

use crate::consts::subneg;
use bytes::{BufMut, BytesMut};

/// Terminal name reported when the caller does not configure one.
pub const DEFAULT_TERMINAL_TYPE: &str = "XTERM";

/// Builds the reply payload for a TERMINAL-TYPE request.
///
/// A request payload starting with `SEND` gets `IS` followed by the terminal
/// name. Anything else (empty payload, unexpected first byte, trailing
/// garbage after SEND is tolerated) produces no reply.
pub fn respond(payload: &[u8], terminal_type: &str) -> Option<BytesMut> {
    if payload.first() != Some(&subneg::SEND) {
        return None;
    }
    let mut reply = BytesMut::with_capacity(1 + terminal_type.len());
    reply.put_u8(subneg::IS);
    reply.put_slice(terminal_type.as_bytes());
    Some(reply)
}
