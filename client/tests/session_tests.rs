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

//! Session tests for netterm-client
//!
//! Each test runs a scripted server on a loopback listener and drives the
//! client against it.

use netterm_client::{ClientConfig, ClientError, SessionEvent, TelnetClient, WindowSize};
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const IAC: u8 = 255;
const SE: u8 = 240;
const SB: u8 = 250;
const WILL: u8 = 251;
const DO: u8 = 253;
const NAWS: u8 = 31;

/// Number of bytes in the client's opening offers
/// (DO ECHO, DO SGA, WILL SGA, WILL NAWS).
const OPENING_OFFERS_LEN: usize = 12;

async fn listen() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, addr)
}

async fn accept_and_drain_offers(listener: &TcpListener) -> TcpStream {
    let (mut socket, _) = listener.accept().await.unwrap();
    let mut offers = [0u8; OPENING_OFFERS_LEN];
    socket.read_exact(&mut offers).await.unwrap();
    socket
}

async fn connected_client(addr: SocketAddr) -> TelnetClient {
    let config = ClientConfig::new(addr.ip().to_string(), addr.port());
    let mut client = TelnetClient::new(config);
    client.connect().await.unwrap();
    client
}

#[tokio::test]
async fn negotiates_answers_and_delivers_text() {
    let (listener, addr) = listen().await;

    let server = tokio::spawn(async move {
        let mut socket = accept_and_drain_offers(&listener).await;
        socket.write_all(&[IAC, DO, NAWS]).await.unwrap();
        socket.write_all(b"hello").await.unwrap();

        // The acceptance arrives before anything else.
        let mut reply = [0u8; 3];
        socket.read_exact(&mut reply).await.unwrap();
        assert_eq!(reply, [IAC, WILL, NAWS]);

        // Dropping the socket ends the session.
    });

    let mut client = connected_client(addr).await;
    assert!(client.is_connected());

    assert_eq!(
        client.next_event().await.unwrap(),
        SessionEvent::Text("hello".to_string())
    );
    assert_eq!(client.next_event().await.unwrap(), SessionEvent::Closed);
    assert!(!client.is_connected());

    server.await.unwrap();
}

#[tokio::test]
async fn size_report_flows_once_naws_is_accepted() {
    let (listener, addr) = listen().await;

    let server = tokio::spawn(async move {
        let mut socket = accept_and_drain_offers(&listener).await;
        socket.write_all(&[IAC, DO, NAWS]).await.unwrap();
        socket.write_all(b"ok").await.unwrap();

        // WILL NAWS followed immediately by the stored size.
        let mut reply = [0u8; 12];
        socket.read_exact(&mut reply).await.unwrap();
        assert_eq!(
            reply,
            [IAC, WILL, NAWS, IAC, SB, NAWS, 0x00, 0x50, 0x00, 0x18, IAC, SE]
        );

        // A resize after negotiation produces a bare update.
        let mut update = [0u8; 9];
        socket.read_exact(&mut update).await.unwrap();
        assert_eq!(update, [IAC, SB, NAWS, 0x00, 0x84, 0x00, 0x2B, IAC, SE]);
    });

    let mut client = connected_client(addr).await;

    // Reported before the server asks: stored, nothing sent yet.
    client.report_size(WindowSize::new(80, 24)).await.unwrap();

    assert_eq!(
        client.next_event().await.unwrap(),
        SessionEvent::Text("ok".to_string())
    );
    client.report_size(WindowSize::new(132, 43)).await.unwrap();

    server.await.unwrap();
    client.disconnect().await.unwrap();
}

#[tokio::test]
async fn send_translates_bare_cr_on_the_wire() {
    let (listener, addr) = listen().await;

    let server = tokio::spawn(async move {
        let mut socket = accept_and_drain_offers(&listener).await;
        let mut line = [0u8; 6];
        socket.read_exact(&mut line).await.unwrap();
        assert_eq!(&line, b"look\r\n");
    });

    let mut client = connected_client(addr).await;
    client.send("look\r").await.unwrap();

    server.await.unwrap();
    client.disconnect().await.unwrap();
}

#[tokio::test]
async fn usage_errors_before_connect() {
    let mut client = TelnetClient::new(ClientConfig::default());

    assert!(matches!(
        client.send("hi").await,
        Err(ClientError::NotConnected)
    ));
    assert!(matches!(
        client.report_size(WindowSize::new(80, 24)).await,
        Err(ClientError::NotConnected)
    ));
    assert!(matches!(
        client.next_event().await,
        Err(ClientError::NotConnected)
    ));

    // disconnect is a no-op in any state
    client.disconnect().await.unwrap();
    client.disconnect().await.unwrap();
}

#[tokio::test]
async fn connect_twice_is_a_usage_error() {
    let (listener, addr) = listen().await;
    let server = tokio::spawn(async move {
        let _socket = accept_and_drain_offers(&listener).await;
    });

    let mut client = connected_client(addr).await;
    assert!(matches!(
        client.connect().await,
        Err(ClientError::AlreadyConnected)
    ));

    server.await.unwrap();
    client.disconnect().await.unwrap();
}
