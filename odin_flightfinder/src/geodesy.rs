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

//! distances as they are reported in flight records: great circle statute miles, truncated to whole miles

use odin_common::geo::haversine_distance_miles;

/// great circle distance in statute miles between two signed decimal degree positions
#[inline]
pub fn distance_miles (lat1: f64, lon1: f64, lat2: f64, lon2: f64)->f64 {
    haversine_distance_miles( lat1, lon1, lat2, lon2)
}

/// distance in whole miles, truncated towards zero (not rounded)
pub fn truncated_miles (lat1: f64, lon1: f64, lat2: f64, lon2: f64)->i64 {
    distance_miles( lat1, lon1, lat2, lon2).trunc() as i64
}
