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

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors surfaced by the codec while decoding or encoding the byte stream.
///
/// A `Subnegotiation` error is fatal for the connection: the stream can no
/// longer be framed reliably, and resynchronizing by guessing would risk
/// interpreting data bytes as commands. Callers should close the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// An I/O error occurred on the underlying stream.
    Io {
        /// The kind of I/O error that occurred
        kind: std::io::ErrorKind,
        /// Description of the operation that failed
        operation: String,
    },

    /// A subnegotiation block was malformed: an IAC inside `SB ... SE` was
    /// followed by a byte that is neither `SE` (terminator) nor `IAC`
    /// (escaped 0xFF).
    Subnegotiation {
        /// The option code the block was tagged with
        option: u8,
        /// The unexpected byte that followed the IAC
        byte: u8,
    },
}

impl std::error::Error for CodecError {}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::Io { kind, operation } => {
                write!(f, "I/O error during {}: {:?}", operation, kind)
            }
            CodecError::Subnegotiation { option, byte } => {
                write!(
                    f,
                    "malformed subnegotiation for option {}: unexpected byte 0x{:02X} after IAC",
                    option, byte
                )
            }
        }
    }
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io {
            kind: err.kind(),
            operation: err.to_string(),
        }
    }
}
