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

//! Per-option subnegotiation payload codecs.
//!
//! Each submodule covers one option's `SB ... SE` payload format. The
//! payloads here are the *unescaped* bytes between the option code and the
//! terminator; IAC escaping is applied generically by the frame encoder.

pub mod environ;
pub mod naws;
pub mod ttype;
