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

//! Client error types

use netterm_telnetcodec::CodecError;
use std::time::Duration;
use thiserror::Error;

/// Client error type
///
/// Transport and protocol errors drop the session; `NotConnected` and
/// `AlreadyConnected` are usage errors and leave any session untouched.
#[derive(Debug, Error)]
pub enum ClientError {
    /// I/O error on the underlying stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The connection attempt did not complete in time
    #[error("connection timed out after {0:?}")]
    Timeout(Duration),

    /// The host name did not resolve to any address
    #[error("could not resolve {0}")]
    Resolve(String),

    /// Operation requires an established connection
    #[error("not connected")]
    NotConnected,

    /// `connect` called while a session is already open
    #[error("already connected")]
    AlreadyConnected,

    /// The protocol stream could not be framed
    #[error("protocol error: {0}")]
    Codec(#[from] CodecError),
}

/// Client result type
pub type Result<T> = std::result::Result<T, ClientError>;
