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

use crate::args;
use crate::consts;
use crate::frame::{NegotiationVerb, TelnetFrame};
use std::fmt::Formatter;
use tracing::debug;

///
/// The Telnet options this client knows by name. Every other code decodes to
/// `Unknown` and is carried through negotiation as an opaque byte; unknown
/// codes are never an error, they simply fall to the negative branch of the
/// default policy.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TelnetOption {
    /// Echo [RFC857](https://tools.ietf.org/html/rfc857)
    Echo,
    /// Suppress Go Ahead [RFC858](https://tools.ietf.org/html/rfc858)
    SuppressGoAhead,
    /// Terminal Type [RFC1091](https://tools.ietf.org/html/rfc1091)
    TerminalType,
    /// Negotiate About Window Size [RFC1073](https://tools.ietf.org/html/rfc1073)
    Naws,
    /// New Environment [RFC1572](https://tools.ietf.org/html/rfc1572)
    NewEnviron,
    /// Any option code this client has no specific handling for
    Unknown(u8),
}

impl TelnetOption {
    /// Maps an option byte to its variant; unassigned codes map to `Unknown`.
    pub fn from_u8(byte: u8) -> Self {
        match byte {
            consts::option::ECHO => TelnetOption::Echo,
            consts::option::SGA => TelnetOption::SuppressGoAhead,
            consts::option::TTYPE => TelnetOption::TerminalType,
            consts::option::NAWS => TelnetOption::Naws,
            consts::option::NEW_ENVIRON => TelnetOption::NewEnviron,
            byte => TelnetOption::Unknown(byte),
        }
    }

    /// The wire byte for this option.
    pub fn to_u8(self) -> u8 {
        match self {
            TelnetOption::Echo => consts::option::ECHO,
            TelnetOption::SuppressGoAhead => consts::option::SGA,
            TelnetOption::TerminalType => consts::option::TTYPE,
            TelnetOption::Naws => consts::option::NAWS,
            TelnetOption::NewEnviron => consts::option::NEW_ENVIRON,
            TelnetOption::Unknown(byte) => byte,
        }
    }
}

impl From<u8> for TelnetOption {
    fn from(byte: u8) -> Self {
        Self::from_u8(byte)
    }
}

impl From<TelnetOption> for u8 {
    fn from(option: TelnetOption) -> Self {
        option.to_u8()
    }
}

impl std::fmt::Display for TelnetOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TelnetOption::Echo => write!(f, "Echo"),
            TelnetOption::SuppressGoAhead => write!(f, "SuppressGoAhead"),
            TelnetOption::TerminalType => write!(f, "TerminalType"),
            TelnetOption::Naws => write!(f, "Naws"),
            TelnetOption::NewEnviron => write!(f, "NewEnviron"),
            TelnetOption::Unknown(option) => write!(f, "Unknown({option})"),
        }
    }
}

/// Which side of the connection an option state change applies to.
///
/// Negotiation runs independently per direction: `DO`/`DONT` from the peer
/// govern the local side, `WILL`/`WONT` govern the remote side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TelnetSide {
    /// Our side of the connection (`we_will`)
    Local,
    /// The peer's side of the connection (`they_will`)
    Remote,
}

/// Per-option negotiation flags, both directions.
///
/// RFC 854 default: every option starts disabled in both directions and only
/// an explicit peer message flips a flag.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NegotiationState {
    /// The local side has agreed to enable the option
    pub we_will: bool,
    /// The remote side has agreed to enable the option
    pub they_will: bool,
}

/// A completed enable/disable transition, reported so callers can run side
/// effects (e.g. start sending NAWS updates) strictly after the reply frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OptionStatus {
    /// The option that changed
    pub option: TelnetOption,
    /// Which direction changed
    pub side: TelnetSide,
    /// The new value of the flag
    pub enabled: bool,
}

/// A policy's answer to an incoming negotiation request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decision {
    /// Agree to the request (reply `WILL` to `DO`, `DO` to `WILL`)
    Accept,
    /// Refuse the request (reply `WONT` to `DO`, `DONT` to `WILL`)
    Refuse,
}

///
/// Injectable negotiation policy, one decision point per command category.
///
/// The engine owns all state and reply bookkeeping; a policy only answers
/// "do we want this option?". `DONT` needs no policy input because RFC 854
/// leaves only one legal reaction (disable and acknowledge).
///
pub trait NegotiationPolicy {
    /// Peer sent `DO option`: are we willing to enable it on our side?
    fn on_do(&self, option: TelnetOption) -> Decision;

    /// Peer sent `WILL option`: do we want it enabled on their side?
    fn on_will(&self, option: TelnetOption) -> Decision;

    /// Peer sent `WONT option`: should we immediately press with a fresh
    /// `DO`? Returning `false` yields a plain acknowledgment instead.
    fn on_wont(&self, option: TelnetOption) -> bool;
}

/// The stock client policy.
///
/// Locally we offer NAWS, TERMINAL-TYPE, NEW-ENVIRON and SUPPRESS-GO-AHEAD;
/// remotely we want ECHO and SUPPRESS-GO-AHEAD. ECHO is re-requested when the
/// server refuses it, to keep pressing for server-side echo.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPolicy;

impl NegotiationPolicy for DefaultPolicy {
    fn on_do(&self, option: TelnetOption) -> Decision {
        match option {
            TelnetOption::Naws
            | TelnetOption::TerminalType
            | TelnetOption::NewEnviron
            | TelnetOption::SuppressGoAhead => Decision::Accept,
            _ => Decision::Refuse,
        }
    }

    fn on_will(&self, option: TelnetOption) -> Decision {
        match option {
            TelnetOption::Echo | TelnetOption::SuppressGoAhead => Decision::Accept,
            _ => Decision::Refuse,
        }
    }

    fn on_wont(&self, option: TelnetOption) -> bool {
        option == TelnetOption::Echo
    }
}

/// The engine's reaction to one incoming negotiation command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reaction {
    /// Reply frame to send, if the command calls for one
    pub reply: Option<TelnetFrame>,
    /// State transition that occurred, if any
    pub status: Option<OptionStatus>,
}

///
/// Tracks negotiation state for every option code and decides the reply to
/// each incoming `DO`/`DONT`/`WILL`/`WONT`, according to a pluggable
/// [`NegotiationPolicy`].
///
/// Replies follow RFC 854 (every request gets an answer) with one deliberate
/// tightening: acknowledgments of *disable* requests are suppressed when the
/// option is already disabled, so two strictly-acknowledging endpoints cannot
/// ping-pong `DONT`/`WONT` forever (RFC 1143's loop concern). A first
/// `DO`/`WILL` for any option, including unknown codes, always gets exactly
/// one reply.
///
/// The engine never emits an affirmative `WILL`/`DO` for an option its policy
/// refuses, and never mutates a flag except for an explicit peer message.
///
pub struct NegotiationEngine<P = DefaultPolicy> {
    state: [NegotiationState; 256],
    policy: P,
    terminal_type: String,
}

impl NegotiationEngine<DefaultPolicy> {
    /// Creates an engine with the stock client policy.
    pub fn new() -> Self {
        Self::with_policy(DefaultPolicy)
    }
}

impl Default for NegotiationEngine<DefaultPolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: NegotiationPolicy> NegotiationEngine<P> {
    /// Creates an engine with a caller-supplied policy.
    pub fn with_policy(policy: P) -> Self {
        NegotiationEngine {
            state: [NegotiationState::default(); 256],
            policy,
            terminal_type: args::ttype::DEFAULT_TERMINAL_TYPE.to_string(),
        }
    }

    /// Overrides the terminal name reported in TERMINAL-TYPE replies.
    pub fn with_terminal_type(mut self, name: impl Into<String>) -> Self {
        self.terminal_type = name.into();
        self
    }

    /// Current negotiation flags for an option.
    pub fn state(&self, option: TelnetOption) -> NegotiationState {
        self.state[option.to_u8() as usize]
    }

    /// Whether the option is enabled on our side.
    pub fn local_enabled(&self, option: TelnetOption) -> bool {
        self.state(option).we_will
    }

    /// Whether the option is enabled on the peer's side.
    pub fn remote_enabled(&self, option: TelnetOption) -> bool {
        self.state(option).they_will
    }

    /// The proactive offers sent once at connection start: `DO ECHO`,
    /// `DO SUPPRESS-GO-AHEAD`, `WILL SUPPRESS-GO-AHEAD`, `WILL NAWS`.
    ///
    /// Offers do not touch the flags; only the peer's eventual reply does.
    pub fn opening_offers(&self) -> Vec<TelnetFrame> {
        vec![
            TelnetFrame::Do(TelnetOption::Echo),
            TelnetFrame::Do(TelnetOption::SuppressGoAhead),
            TelnetFrame::Will(TelnetOption::SuppressGoAhead),
            TelnetFrame::Will(TelnetOption::Naws),
        ]
    }

    /// Processes one incoming negotiation command and returns the reply to
    /// send (if any) plus the state transition it caused (if any).
    pub fn receive(&mut self, verb: NegotiationVerb, option: TelnetOption) -> Reaction {
        debug!(%verb, %option, "received negotiation");
        match verb {
            NegotiationVerb::Do => self.recv_do(option),
            NegotiationVerb::Dont => self.recv_dont(option),
            NegotiationVerb::Will => self.recv_will(option),
            NegotiationVerb::Wont => self.recv_wont(option),
        }
    }

    /// Dispatches a completed subnegotiation payload to the per-option
    /// handler and returns the reply block, if the option defines one.
    ///
    /// Options without a handler, empty payloads, and payloads that do not
    /// start with the expected request byte are ignored without error.
    pub fn receive_subnegotiation(
        &self,
        option: TelnetOption,
        payload: &[u8],
    ) -> Option<TelnetFrame> {
        match option {
            TelnetOption::TerminalType => args::ttype::respond(payload, &self.terminal_type)
                .map(|reply| TelnetFrame::Subnegotiate(option, reply)),
            TelnetOption::NewEnviron => args::environ::respond(payload)
                .map(|reply| TelnetFrame::Subnegotiate(option, reply)),
            _ => {
                debug!(%option, len = payload.len(), "ignoring subnegotiation");
                None
            }
        }
    }

    fn recv_do(&mut self, option: TelnetOption) -> Reaction {
        let idx = option.to_u8() as usize;
        match self.policy.on_do(option) {
            Decision::Accept => {
                if self.state[idx].we_will {
                    // Already enabled: a repeat DO changes nothing, and
                    // re-acknowledging it risks a reply loop.
                    Reaction::default()
                } else {
                    self.state[idx].we_will = true;
                    Reaction {
                        reply: Some(TelnetFrame::Will(option)),
                        status: Some(OptionStatus {
                            option,
                            side: TelnetSide::Local,
                            enabled: true,
                        }),
                    }
                }
            }
            Decision::Refuse => Reaction {
                reply: Some(TelnetFrame::Wont(option)),
                status: None,
            },
        }
    }

    fn recv_dont(&mut self, option: TelnetOption) -> Reaction {
        let idx = option.to_u8() as usize;
        if self.state[idx].we_will {
            self.state[idx].we_will = false;
            Reaction {
                reply: Some(TelnetFrame::Wont(option)),
                status: Some(OptionStatus {
                    option,
                    side: TelnetSide::Local,
                    enabled: false,
                }),
            }
        } else {
            // Already disabled, nothing to acknowledge.
            Reaction::default()
        }
    }

    fn recv_will(&mut self, option: TelnetOption) -> Reaction {
        let idx = option.to_u8() as usize;
        match self.policy.on_will(option) {
            Decision::Accept => {
                if self.state[idx].they_will {
                    Reaction::default()
                } else {
                    self.state[idx].they_will = true;
                    Reaction {
                        reply: Some(TelnetFrame::Do(option)),
                        status: Some(OptionStatus {
                            option,
                            side: TelnetSide::Remote,
                            enabled: true,
                        }),
                    }
                }
            }
            Decision::Refuse => Reaction {
                reply: Some(TelnetFrame::Dont(option)),
                status: None,
            },
        }
    }

    fn recv_wont(&mut self, option: TelnetOption) -> Reaction {
        let idx = option.to_u8() as usize;
        let was_enabled = self.state[idx].they_will;
        self.state[idx].they_will = false;

        let reply = if self.policy.on_wont(option) {
            // Keep pressing: ask again right away.
            Some(TelnetFrame::Do(option))
        } else if was_enabled {
            Some(TelnetFrame::Dont(option))
        } else {
            None
        };

        Reaction {
            reply,
            status: was_enabled.then_some(OptionStatus {
                option,
                side: TelnetSide::Remote,
                enabled: false,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_option_do_yields_single_wont() {
        let mut engine = NegotiationEngine::new();
        let reaction = engine.receive(NegotiationVerb::Do, TelnetOption::Unknown(200));
        assert_eq!(
            reaction.reply,
            Some(TelnetFrame::Wont(TelnetOption::Unknown(200)))
        );
        assert_eq!(reaction.status, None);
        assert!(!engine.local_enabled(TelnetOption::Unknown(200)));
    }

    #[test]
    fn unknown_option_will_yields_single_dont() {
        let mut engine = NegotiationEngine::new();
        let reaction = engine.receive(NegotiationVerb::Will, TelnetOption::Unknown(86));
        assert_eq!(
            reaction.reply,
            Some(TelnetFrame::Dont(TelnetOption::Unknown(86)))
        );
        assert!(!engine.remote_enabled(TelnetOption::Unknown(86)));
    }

    #[test]
    fn do_naws_enables_local_and_replies_will() {
        let mut engine = NegotiationEngine::new();
        let reaction = engine.receive(NegotiationVerb::Do, TelnetOption::Naws);
        assert_eq!(reaction.reply, Some(TelnetFrame::Will(TelnetOption::Naws)));
        assert_eq!(
            reaction.status,
            Some(OptionStatus {
                option: TelnetOption::Naws,
                side: TelnetSide::Local,
                enabled: true,
            })
        );
        assert!(engine.local_enabled(TelnetOption::Naws));
    }

    #[test]
    fn repeated_do_is_not_reacknowledged() {
        let mut engine = NegotiationEngine::new();
        engine.receive(NegotiationVerb::Do, TelnetOption::Naws);
        let second = engine.receive(NegotiationVerb::Do, TelnetOption::Naws);
        assert_eq!(second, Reaction::default());
        assert!(engine.local_enabled(TelnetOption::Naws));
    }

    #[test]
    fn dont_disables_and_acknowledges_once() {
        let mut engine = NegotiationEngine::new();
        engine.receive(NegotiationVerb::Do, TelnetOption::Naws);

        let first = engine.receive(NegotiationVerb::Dont, TelnetOption::Naws);
        assert_eq!(first.reply, Some(TelnetFrame::Wont(TelnetOption::Naws)));
        assert!(!engine.local_enabled(TelnetOption::Naws));

        // Redundant DONT gets no reply, so two strict endpoints cannot loop.
        let second = engine.receive(NegotiationVerb::Dont, TelnetOption::Naws);
        assert_eq!(second, Reaction::default());
    }

    #[test]
    fn will_echo_enables_remote_and_replies_do() {
        let mut engine = NegotiationEngine::new();
        let reaction = engine.receive(NegotiationVerb::Will, TelnetOption::Echo);
        assert_eq!(reaction.reply, Some(TelnetFrame::Do(TelnetOption::Echo)));
        assert!(engine.remote_enabled(TelnetOption::Echo));
    }

    #[test]
    fn wont_echo_rerequests_and_clears_flag() {
        let mut engine = NegotiationEngine::new();
        engine.receive(NegotiationVerb::Will, TelnetOption::Echo);
        assert!(engine.remote_enabled(TelnetOption::Echo));

        let reaction = engine.receive(NegotiationVerb::Wont, TelnetOption::Echo);
        assert_eq!(reaction.reply, Some(TelnetFrame::Do(TelnetOption::Echo)));
        assert!(!engine.remote_enabled(TelnetOption::Echo));
    }

    #[test]
    fn wont_echo_rerequests_even_when_already_disabled() {
        let mut engine = NegotiationEngine::new();
        let reaction = engine.receive(NegotiationVerb::Wont, TelnetOption::Echo);
        assert_eq!(reaction.reply, Some(TelnetFrame::Do(TelnetOption::Echo)));
        assert_eq!(reaction.status, None);
    }

    #[test]
    fn wont_other_option_acknowledges_only_on_transition() {
        let mut engine = NegotiationEngine::new();
        engine.receive(NegotiationVerb::Will, TelnetOption::SuppressGoAhead);

        let first = engine.receive(NegotiationVerb::Wont, TelnetOption::SuppressGoAhead);
        assert_eq!(
            first.reply,
            Some(TelnetFrame::Dont(TelnetOption::SuppressGoAhead))
        );

        let second = engine.receive(NegotiationVerb::Wont, TelnetOption::SuppressGoAhead);
        assert_eq!(second.reply, None);
    }

    #[test]
    fn opening_offers_do_not_mutate_state() {
        let engine = NegotiationEngine::new();
        let offers = engine.opening_offers();
        assert_eq!(
            offers,
            vec![
                TelnetFrame::Do(TelnetOption::Echo),
                TelnetFrame::Do(TelnetOption::SuppressGoAhead),
                TelnetFrame::Will(TelnetOption::SuppressGoAhead),
                TelnetFrame::Will(TelnetOption::Naws),
            ]
        );
        assert!(!engine.local_enabled(TelnetOption::Naws));
        assert!(!engine.remote_enabled(TelnetOption::Echo));
    }

    #[test]
    fn ttype_send_gets_is_reply() {
        let engine = NegotiationEngine::new();
        let reply = engine
            .receive_subnegotiation(TelnetOption::TerminalType, &[crate::consts::subneg::SEND])
            .expect("reply expected");
        match reply {
            TelnetFrame::Subnegotiate(TelnetOption::TerminalType, payload) => {
                assert_eq!(&payload[..], b"\x00XTERM");
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn environ_send_gets_empty_is_reply() {
        let engine = NegotiationEngine::new();
        let reply = engine
            .receive_subnegotiation(TelnetOption::NewEnviron, &[crate::consts::subneg::SEND])
            .expect("reply expected");
        match reply {
            TelnetFrame::Subnegotiate(TelnetOption::NewEnviron, payload) => {
                assert_eq!(&payload[..], &[crate::consts::subneg::IS]);
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn malformed_subnegotiation_payload_is_ignored() {
        let engine = NegotiationEngine::new();
        assert!(
            engine
                .receive_subnegotiation(TelnetOption::TerminalType, &[])
                .is_none()
        );
        assert!(
            engine
                .receive_subnegotiation(TelnetOption::TerminalType, &[0x7F])
                .is_none()
        );
        assert!(
            engine
                .receive_subnegotiation(TelnetOption::Unknown(99), &[1, 2, 3])
                .is_none()
        );
    }

    #[test]
    fn custom_terminal_type_is_reported() {
        let engine = NegotiationEngine::new().with_terminal_type("vt100");
        let reply = engine
            .receive_subnegotiation(TelnetOption::TerminalType, &[crate::consts::subneg::SEND])
            .expect("reply expected");
        match reply {
            TelnetFrame::Subnegotiate(_, payload) => assert_eq!(&payload[..], b"\x00vt100"),
            other => panic!("unexpected reply: {other:?}"),
        }
    }
}
