// Copyright 2025 the Rcam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for a full set of chrome widgets.
//!
//! Only the data parts of the widget options live here. Hooks are attached in code after the
//! configuration has been loaded. With the `serde` feature, every field may be omitted and
//! falls back to its default.

use crate::header_panel::HeaderPanelOptions;
use crate::nav_panel::NavPanelOptions;

/// Root configuration for the chrome widgets.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct ChromeConfig {
    /// Header panel section.
    pub header: HeaderPanelOptions,
    /// Navigation panel section.
    pub nav: NavPanelOptions,
}
