/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
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

/// map into [0..360). Note that tiny negative remainders can round up to 360.0, which we fold back to 0
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    let x = if x < 0.0 { 360.0 + x } else { x };
    if x >= 360.0 { 0.0 } else { x }
}

/// an angle in degrees that is always kept within [0..360)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Angle360(f64);

impl Angle360 {
    #[inline]
    pub fn from_degrees (deg: f64) -> Self { Angle360( normalize_360( deg)) }

    #[inline] pub fn degrees (&self)->f64 { self.0 }

    /// index of the equally sized sector (out of `n_sectors`) this angle falls into, with sector 0 centered on 0deg.
    /// Sector indices are computed as `round_ties_even((deg + half_width) / width) mod n_sectors`, i.e. values that
    /// fall exactly on a sector midpoint round towards the even index
    pub fn centered_sector (&self, n_sectors: usize)->usize {
        let width = 360.0 / n_sectors as f64;
        let idx = ((self.0 + width / 2.0) / width).round_ties_even() as usize;
        idx % n_sectors
    }
}
