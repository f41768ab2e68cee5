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

//! Connect to a Telnet server and print everything it sends.
//!
//! Usage: `cargo run --example watch -- <host> [port]`
//!
//! Set `RUST_LOG=netterm_telnetcodec=debug` to watch the negotiation.

use netterm_client::{ClientConfig, SessionEvent, TelnetClient, WindowSize};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "localhost".to_string());
    let port = args.next().and_then(|p| p.parse().ok()).unwrap_or(23);

    let mut client = TelnetClient::new(ClientConfig::new(host, port));
    client.connect().await?;
    client.report_size(WindowSize::new(80, 24)).await?;

    loop {
        match client.next_event().await? {
            SessionEvent::Text(text) => {
                print!("{text}");
                std::io::stdout().flush()?;
            }
            SessionEvent::Closed => break,
        }
    }
    Ok(())
}
