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

//! Async Telnet client built on the netterm protocol core

use crate::{ClientConfig, ClientError, Result};
use bytes::{BufMut, BytesMut};
use futures::{SinkExt, StreamExt};
use netterm_telnetcodec::{
    NegotiationEngine, OptionStatus, TelnetCodec, TelnetEvent, TelnetFrame, TelnetOption,
    TelnetSide, WindowSizeSync, naws::WindowSize,
};
use tokio::net::{self, TcpStream};
use tokio::time::timeout;
use tokio_util::codec::Framed;
use tracing::{debug, info};

/// Something the session produced for the host application.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SessionEvent {
    /// Decoded printable output from the server
    Text(String),
    /// The server closed the connection
    Closed,
}

/// An interactive Telnet session over TCP.
///
/// The client wires the protocol core together: the codec frames the stream,
/// the negotiation engine answers option traffic, the window-size
/// synchronizer keeps NAWS current, and a streaming text decoder turns data
/// runs into `String`s in the configured encoding.
///
/// Protocol traffic is handled inside [`next_event`](Self::next_event):
/// every reply a received command calls for is written and flushed before
/// the next decode step, so the peer always sees the acknowledgment for
/// command *n* before the client reacts to command *n + 1*.
pub struct TelnetClient {
    config: ClientConfig,
    session: Option<Session>,
}

struct Session {
    framed: Framed<TcpStream, TelnetCodec>,
    engine: NegotiationEngine,
    window: WindowSizeSync,
    text_decoder: encoding_rs::Decoder,
}

impl TelnetClient {
    /// Creates a disconnected client with the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Whether a session is currently open.
    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    /// Resolves the configured host, connects with the configured timeout,
    /// and sends the proactive opening offers.
    ///
    /// # Errors
    ///
    /// `AlreadyConnected` if a session is open, `Resolve`/`Timeout`/`Io` for
    /// connection failures.
    pub async fn connect(&mut self) -> Result<()> {
        if self.session.is_some() {
            return Err(ClientError::AlreadyConnected);
        }
        let address = self.config.address();
        info!(%address, "connecting");

        let addr = net::lookup_host(&address)
            .await
            .map_err(|_| ClientError::Resolve(address.clone()))?
            .next()
            .ok_or_else(|| ClientError::Resolve(address.clone()))?;

        let stream = timeout(self.config.connect_timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| ClientError::Timeout(self.config.connect_timeout))??;
        stream.set_nodelay(true)?;

        let mut framed =
            Framed::with_capacity(stream, TelnetCodec::new(), self.config.buffer_size);
        let engine =
            NegotiationEngine::new().with_terminal_type(self.config.terminal_type.clone());
        for offer in engine.opening_offers() {
            framed.feed(offer).await?;
        }
        framed.flush().await?;

        self.session = Some(Session {
            framed,
            engine,
            window: WindowSizeSync::new(),
            text_decoder: self.config.encoding.new_decoder(),
        });
        info!(%address, "connected");
        Ok(())
    }

    /// Encodes and sends text, translating each bare CR to CRLF per RFC 854.
    ///
    /// # Errors
    ///
    /// `NotConnected` when no session is open.
    pub async fn send(&mut self, text: &str) -> Result<()> {
        let session = self.session.as_mut().ok_or(ClientError::NotConnected)?;
        let (encoded, _, _) = self.config.encoding.encode(text);
        let payload = translate_line_endings(&encoded);
        session.framed.send(TelnetFrame::Data(payload)).await?;
        Ok(())
    }

    /// Records the local terminal size and sends a NAWS update if the peer
    /// has accepted the option.
    ///
    /// # Errors
    ///
    /// `NotConnected` when no session is open.
    pub async fn report_size(&mut self, size: WindowSize) -> Result<()> {
        let session = self.session.as_mut().ok_or(ClientError::NotConnected)?;
        if let Some(frame) = session.window.report(size) {
            session.framed.send(frame).await?;
        }
        Ok(())
    }

    /// Waits for the next event worth surfacing to the application.
    ///
    /// Negotiation and subnegotiation traffic is answered internally and
    /// never surfaces; only decoded text and the end of the stream do. A
    /// transport or framing error drops the session and is returned.
    pub async fn next_event(&mut self) -> Result<SessionEvent> {
        loop {
            let session = self.session.as_mut().ok_or(ClientError::NotConnected)?;
            match Session::step(session).await {
                Ok(Some(SessionEvent::Closed)) => {
                    self.session = None;
                    info!("connection closed by server");
                    return Ok(SessionEvent::Closed);
                }
                Ok(Some(event)) => return Ok(event),
                Ok(None) => {}
                Err(err) => {
                    self.session = None;
                    return Err(err);
                }
            }
        }
    }

    /// Flushes and closes the session. Safe to call in any state; a second
    /// call is a no-op.
    pub async fn disconnect(&mut self) -> Result<()> {
        if let Some(mut session) = self.session.take() {
            session.framed.close().await?;
            info!("disconnected");
        }
        Ok(())
    }
}

impl Session {
    /// Processes one decoded protocol event. `Ok(None)` means the event was
    /// consumed internally and the caller should keep reading.
    async fn step(&mut self) -> Result<Option<SessionEvent>> {
        match self.framed.next().await {
            None => Ok(Some(SessionEvent::Closed)),
            Some(Err(err)) => Err(err.into()),
            Some(Ok(TelnetEvent::Data(run))) => {
                let text = self.decode_text(&run);
                if text.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(SessionEvent::Text(text)))
                }
            }
            Some(Ok(TelnetEvent::Command(command))) => {
                debug!(?command, "ignoring command");
                Ok(None)
            }
            Some(Ok(TelnetEvent::Negotiate(verb, option))) => {
                let reaction = self.engine.receive(verb, option);
                if let Some(reply) = reaction.reply {
                    self.framed.feed(reply).await?;
                }
                // NAWS side effects run after the acknowledgment is queued,
                // so the peer sees WILL NAWS before the first size report.
                match reaction.status {
                    Some(OptionStatus {
                        option: TelnetOption::Naws,
                        side: TelnetSide::Local,
                        enabled: true,
                    }) => {
                        if let Some(frame) = self.window.activate() {
                            self.framed.feed(frame).await?;
                        }
                    }
                    Some(OptionStatus {
                        option: TelnetOption::Naws,
                        side: TelnetSide::Local,
                        enabled: false,
                    }) => self.window.deactivate(),
                    _ => {}
                }
                self.framed.flush().await?;
                Ok(None)
            }
            Some(Ok(TelnetEvent::Subnegotiate(option, payload))) => {
                if let Some(reply) = self.engine.receive_subnegotiation(option, &payload) {
                    self.framed.send(reply).await?;
                }
                Ok(None)
            }
        }
    }

    fn decode_text(&mut self, bytes: &[u8]) -> String {
        let capacity = self
            .text_decoder
            .max_utf8_buffer_length(bytes.len())
            .unwrap_or(bytes.len() * 3 + 4);
        let mut text = String::with_capacity(capacity);
        let _ = self.text_decoder.decode_to_string(bytes, &mut text, false);
        text
    }
}

/// RFC 854 line discipline for outgoing data: a CR not already followed by
/// LF gets one appended. Existing CRLF pairs pass through untouched.
fn translate_line_endings(input: &[u8]) -> BytesMut {
    let mut out = BytesMut::with_capacity(input.len());
    let mut iter = input.iter().peekable();
    while let Some(&byte) = iter.next() {
        out.put_u8(byte);
        if byte == b'\r' && iter.peek() != Some(&&b'\n') {
            out.put_u8(b'\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_cr_becomes_crlf() {
        assert_eq!(&translate_line_endings(b"a\rb")[..], b"a\r\nb");
        assert_eq!(&translate_line_endings(b"line\r")[..], b"line\r\n");
    }

    #[test]
    fn existing_crlf_is_untouched() {
        assert_eq!(&translate_line_endings(b"line\r\n")[..], b"line\r\n");
    }

    #[test]
    fn lone_lf_is_untouched() {
        assert_eq!(&translate_line_endings(b"a\nb")[..], b"a\nb");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(&translate_line_endings(b"hello")[..], b"hello");
    }
}
