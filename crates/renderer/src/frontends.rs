// SPDX-License-Identifier: MIT

//!
//! Frontends that draw laid out timelines
//!

pub mod svg;
