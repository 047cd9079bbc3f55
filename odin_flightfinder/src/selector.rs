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

use crate::aircraft::AircraftState;

/// ADS-B emitter categories of large aircraft (A3: large, A4: high vortex large, A5: heavy)
pub const AIRLINER_CATEGORIES: [&str;3] = ["A3", "A4", "A5"];

pub fn is_airliner (state: &AircraftState)->bool {
    state.category().is_some_and( |c| AIRLINER_CATEGORIES.contains( &c))
}

/// the aircraft with the smallest reported distance. If `prefer_airliners` is set only airliner categories
/// are eligible. Aircraft without a distance count as 0, aircraft with a non-numeric distance are skipped.
/// Ties resolve to the first candidate in snapshot order. Returns None if there is no eligible aircraft
pub fn select_closest (snapshot: &[AircraftState], prefer_airliners: bool)->Option<(usize,&AircraftState)> {
    let mut closest: Option<(usize,f64)> = None;

    for (i,state) in snapshot.iter().enumerate() {
        if prefer_airliners && !is_airliner( state) { continue }

        let dist = match (state.distance(), state.get("dst")) {
            (Some(d), _) => d,
            (None, None) => 0.0,
            (None, Some(_)) => continue // garbage distance
        };
        if closest.is_none_or( |(_,d)| dist < d) {
            closest = Some((i,dist));
        }
    }

    closest.map( |(i,_)| (i, &snapshot[i]))
}
