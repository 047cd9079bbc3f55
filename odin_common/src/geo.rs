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
#![allow(uncommon_codepoints,non_snake_case)]

//! great circle computations on a spherical earth model. Positions are given as signed decimal degrees
//! and are *not* normalized or range checked - out-of-range input still yields a (possibly degenerate) number.
//! Callers have to make sure degrees are finite.

use uom::si::{f64::Length, length::mile};
use crate::{geo_constants::MEAN_EARTH_RADIUS_MILES, sin2, cos, atan2, sqrt, rad};

/// the mean earth radius as a uom length
pub fn mean_earth_radius ()->Length { Length::new::<mile>( MEAN_EARTH_RADIUS_MILES) }

/// central angle in radians between two lat/lon degree positions, using the haversine formula
pub fn haversine_central_angle (lat1: f64, lon1: f64, lat2: f64, lon2: f64)->f64 {
    let φ1 = rad(lat1);
    let φ2 = rad(lat2);
    let Δφ = φ2 - φ1;
    let Δλ = rad(lon2) - rad(lon1);

    let a = (sin2(Δφ / 2.0) + cos(φ1) * cos(φ2) * sin2(Δλ / 2.0)).min(1.0); // rounding can push antipodes past 1
    2.0 * atan2( sqrt(a), sqrt(1.0 - a))
}

/// great circle distance between two lat/lon degree positions on a sphere with the given radius
pub fn haversine_distance (lat1: f64, lon1: f64, lat2: f64, lon2: f64, radius: Length)->Length {
    radius * haversine_central_angle( lat1, lon1, lat2, lon2)
}

/// great circle distance in statute miles, using the mean earth radius
pub fn haversine_distance_miles (lat1: f64, lon1: f64, lat2: f64, lon2: f64)->f64 {
    haversine_distance( lat1, lon1, lat2, lon2, mean_earth_radius()).get::<mile>()
}
