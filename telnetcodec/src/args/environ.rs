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

//! New Environment [RFC1572](https://tools.ietf.org/html/rfc1572)

use crate::consts::subneg;
use bytes::{BufMut, BytesMut};

/// Builds the reply payload for a NEW-ENVIRON request.
///
/// A request starting with `SEND` gets the minimal compliant answer: `IS`
/// with no variables. The request may name specific variables after SEND;
/// this client exports none, so the reply is the same either way.
pub fn respond(payload: &[u8]) -> Option<BytesMut> {
    if payload.first() != Some(&subneg::SEND) {
        return None;
    }
    let mut reply = BytesMut::with_capacity(1);
    reply.put_u8(subneg::IS);
    Some(reply)
}
