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

//! # Netterm Telnet Client
//!
//! High-level async Telnet client: TCP transport, automatic option
//! negotiation (ECHO, SUPPRESS-GO-AHEAD, NAWS, TERMINAL-TYPE, NEW-ENVIRON),
//! window-size reporting and configurable text encoding, built on
//! [`netterm_telnetcodec`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use netterm_client::{ClientConfig, SessionEvent, TelnetClient, WindowSize};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("towel.blinkenlights.nl", 23)
//!         .with_terminal_type("xterm-256color");
//!
//!     let mut client = TelnetClient::new(config);
//!     client.connect().await?;
//!     client.report_size(WindowSize::new(80, 24)).await?;
//!
//!     loop {
//!         match client.next_event().await? {
//!             SessionEvent::Text(text) => print!("{text}"),
//!             SessionEvent::Closed => break,
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Handler-Driven Sessions
//!
//! For applications that prefer callbacks over an event loop, implement
//! [`SessionHandler`] and call [`TelnetClient::run`]:
//!
//! ```no_run
//! use netterm_client::{ClientConfig, SessionHandler, TelnetClient};
//! use std::sync::Arc;
//!
//! struct Printer;
//!
//! #[async_trait::async_trait]
//! impl SessionHandler for Printer {
//!     async fn on_text(&self, text: &str) {
//!         print!("{text}");
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = TelnetClient::new(ClientConfig::new("localhost", 23));
//! client.connect().await?;
//! client.run(Arc::new(Printer)).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod handler;

pub use client::{SessionEvent, TelnetClient};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use handler::SessionHandler;

// Protocol-core types that appear in this crate's API surface.
pub use netterm_telnetcodec::naws::WindowSize;
pub use netterm_telnetcodec::{CodecError, TelnetOption};
