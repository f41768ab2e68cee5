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

//! Negotiate About Window Size [RFC1073](https://tools.ietf.org/html/rfc1073)

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use bytes::{BufMut, BytesMut};

/// Terminal dimensions carried by a NAWS subnegotiation.
///
/// The wire format is four bytes: columns then rows, each a big-endian
/// 16-bit field. RFC 1073 frames these as signed fields, so values above
/// 32767 are an input-validation concern for the caller; this type stores
/// `u16` and encodes unconditionally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    /// Terminal width in character cells
    pub cols: u16,
    /// Terminal height in rows
    pub rows: u16,
}

impl WindowSize {
    /// Creates a `WindowSize` from column and row counts.
    pub fn new(cols: u16, rows: u16) -> Self {
        WindowSize { cols, rows }
    }

    /// Encodes the size as a 4-byte NAWS payload.
    pub fn encode(&self) -> BytesMut {
        let mut payload = BytesMut::with_capacity(4);
        {
            let mut writer = (&mut payload).writer();
            // Infallible on a growable buffer.
            let _ = writer.write_u16::<BigEndian>(self.cols);
            let _ = writer.write_u16::<BigEndian>(self.rows);
        }
        payload
    }

    /// Decodes a 4-byte NAWS payload, or `None` if the payload is not
    /// exactly four bytes.
    pub fn decode(payload: &[u8]) -> Option<Self> {
        if payload.len() != 4 {
            return None;
        }
        let mut reader = payload;
        let cols = reader.read_u16::<BigEndian>().ok()?;
        let rows = reader.read_u16::<BigEndian>().ok()?;
        Some(WindowSize { cols, rows })
    }
}
