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

use crate::TelnetOption;
use crate::args::naws::WindowSize;
use crate::frame::TelnetFrame;
use tracing::debug;

///
/// Keeps the locally known terminal size in sync with the peer over NAWS.
///
/// The synchronizer is driven from two directions: the negotiation engine
/// reports whether the peer currently accepts NAWS (`activate`/`deactivate`,
/// from `DO NAWS`/`DONT NAWS` transitions), and the host reports size changes
/// (`report`). Whenever both a size and an active NAWS negotiation exist, a
/// subnegotiation frame is produced for the caller to send.
///
/// Duplicate reports of the same size produce duplicate frames; the peer is
/// the authority on what it has seen, so nothing is deduplicated here.
///
#[derive(Clone, Debug, Default)]
pub struct WindowSizeSync {
    size: Option<WindowSize>,
    active: bool,
}

impl WindowSizeSync {
    /// Creates a synchronizer with no known size and NAWS inactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last size the host reported, if any.
    pub fn size(&self) -> Option<WindowSize> {
        self.size
    }

    /// Whether the peer currently accepts NAWS updates.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Marks NAWS as accepted by the peer. Returns a frame carrying the
    /// current size if one is already known, so the first update goes out
    /// immediately after the `WILL NAWS` reply.
    pub fn activate(&mut self) -> Option<TelnetFrame> {
        self.active = true;
        self.size.map(|size| {
            debug!(cols = size.cols, rows = size.rows, "sending initial window size");
            Self::frame(size)
        })
    }

    /// Marks NAWS as rejected; no further updates are produced until the
    /// peer accepts again.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Records a size reported by the host. Returns a frame to send while
    /// NAWS is active; otherwise the size is stored silently for later.
    pub fn report(&mut self, size: WindowSize) -> Option<TelnetFrame> {
        self.size = Some(size);
        if self.active {
            debug!(cols = size.cols, rows = size.rows, "sending window size update");
            Some(Self::frame(size))
        } else {
            None
        }
    }

    fn frame(size: WindowSize) -> TelnetFrame {
        TelnetFrame::Subnegotiate(TelnetOption::Naws, size.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    fn naws_frame(cols: u16, rows: u16) -> TelnetFrame {
        TelnetFrame::Subnegotiate(TelnetOption::Naws, WindowSize::new(cols, rows).encode())
    }

    #[test]
    fn activation_with_known_size_sends_immediately() {
        let mut sync = WindowSizeSync::new();
        assert_eq!(sync.report(WindowSize::new(80, 24)), None);
        assert_eq!(sync.activate(), Some(naws_frame(80, 24)));
    }

    #[test]
    fn activation_without_size_sends_nothing() {
        let mut sync = WindowSizeSync::new();
        assert_eq!(sync.activate(), None);
        assert!(sync.is_active());
    }

    #[test]
    fn report_while_active_sends() {
        let mut sync = WindowSizeSync::new();
        sync.activate();
        assert_eq!(sync.report(WindowSize::new(120, 40)), Some(naws_frame(120, 40)));
    }

    #[test]
    fn duplicate_reports_send_twice() {
        let mut sync = WindowSizeSync::new();
        sync.activate();
        let first = sync.report(WindowSize::new(80, 24));
        let second = sync.report(WindowSize::new(80, 24));
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn deactivation_stops_sends_but_keeps_size() {
        let mut sync = WindowSizeSync::new();
        sync.activate();
        sync.report(WindowSize::new(80, 24));
        sync.deactivate();
        assert_eq!(sync.report(WindowSize::new(100, 50)), None);
        assert_eq!(sync.size(), Some(WindowSize::new(100, 50)));

        // Re-acceptance picks up the stored size.
        assert_eq!(sync.activate(), Some(naws_frame(100, 50)));
    }

    #[test]
    fn payload_is_big_endian_cols_rows() {
        let mut sync = WindowSizeSync::new();
        sync.activate();
        match sync.report(WindowSize::new(80, 24)) {
            Some(TelnetFrame::Subnegotiate(TelnetOption::Naws, payload)) => {
                assert_eq!(payload, BytesMut::from(&[0x00, 0x50, 0x00, 0x18][..]));
            }
            other => panic!("unexpected frame: {other:?}"),
        }
    }
}
