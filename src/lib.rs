// SPDX-License-Identifier: PMPL-1.0-or-later

//! langsearch — whole-word search over a static catalog of programming
//! languages.
//!
//! PIPELINE:
//! 1. **Loader**: reads the JSON catalog once, from a file or over HTTP.
//! 2. **Matcher**: case-insensitive whole-word filter over name, tags and
//!    description, keeping catalog order.
//! 3. **Renderer**: pure view model of the results area, plus text, HTML,
//!    JSON and YAML adapters.
//! 4. **Page**: the controller that owns the catalog and turns input
//!    events into render/navigate effects for a landing or results page.

pub mod config;
pub mod diagnostics;
pub mod loader;
pub mod logging;
pub mod matcher;
pub mod page;
pub mod render;
pub mod types;
