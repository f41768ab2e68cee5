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

//! Handler-driven session loop

use crate::{ClientError, Result, SessionEvent, TelnetClient};
use std::sync::Arc;

/// Callback interface for handler-driven sessions.
///
/// All methods have empty default implementations; implement only the
/// events the application cares about.
#[async_trait::async_trait]
pub trait SessionHandler: Send + Sync + 'static {
    /// Called once when the run loop starts
    async fn on_connect(&self) {}
    /// Called for each run of decoded server output
    async fn on_text(&self, _text: &str) {}
    /// Called when the server closes the connection
    async fn on_close(&self) {}
    /// Called when the session fails; the loop exits afterwards
    async fn on_error(&self, _error: &ClientError) {}
}

impl TelnetClient {
    /// Drives the session to completion, dispatching every event to the
    /// handler. Returns when the server closes the connection or the
    /// session fails.
    ///
    /// # Errors
    ///
    /// `NotConnected` when called before [`connect`](Self::connect); any
    /// session error after `on_error` has been dispatched.
    pub async fn run<H: SessionHandler>(&mut self, handler: Arc<H>) -> Result<()> {
        if !self.is_connected() {
            return Err(ClientError::NotConnected);
        }
        handler.on_connect().await;
        loop {
            match self.next_event().await {
                Ok(SessionEvent::Text(text)) => handler.on_text(&text).await,
                Ok(SessionEvent::Closed) => {
                    handler.on_close().await;
                    return Ok(());
                }
                Err(err) => {
                    handler.on_error(&err).await;
                    return Err(err);
                }
            }
        }
    }
}
