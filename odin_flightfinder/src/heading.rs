/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use odin_common::angle::Angle360;

/// arrow glyphs for the eight compass sectors, clockwise starting with north
pub const COMPASS_GLYPHS: [&str;8] = ["↑", "↗", "→", "↘", "↓", "↙", "←", "↖"];

/// arrow glyph for the given heading, which is normalized into [0,360) first. The sector index is
/// `round_ties_even((deg + 22.5) / 45) mod 8`, hence exact multiples of 90deg stay on their cardinal
/// direction (90deg is "→", 270deg is "←") while e.g. 10deg already yields "↗"
pub fn compass_glyph (degrees: f64)->&'static str {
    let angle = Angle360::from_degrees( degrees);
    COMPASS_GLYPHS[ angle.centered_sector( COMPASS_GLYPHS.len())]
}

/// heading label "<glyph> <deg>°" where `deg` is the original (non-normalized) value, e.g. "→ 90°"
pub fn format_heading (degrees: f64)->String {
    format!("{} {}°", compass_glyph( degrees), degrees)
}
