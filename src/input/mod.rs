// SPDX-License-Identifier: MPL-2.0
//! Input-boundary policies.
//!
//! The gallery and lightbox state machines only consume well-formed intents
//! ("select this thumbnail", "open the lightbox"); turning raw widget
//! presses into those intents happens here.

pub mod click;
