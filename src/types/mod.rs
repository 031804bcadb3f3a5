// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Constrained value types shared across the pipeline.
//!
//! Each type validates its range or format at construction, so a value that
//! exists is always legal. The schema module reads the `MIN`/`MAX` constants
//! defined here when rendering the backend's response-format constraint,
//! keeping request-side and validation-side limits in one place.

mod brightness;
mod rgb_color;
mod temperature;

pub use brightness::Brightness;
pub use rgb_color::RgbColor;
pub use temperature::Temperature;
