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

//! aircraft telemetry as reported by ADS-B aggregators (the "ac" entries of adsb.lol / readsb JSON).
//!
//! Almost every telemetry field is optional and feeders are not consistent about value types (numbers
//! are sometimes sent as strings), hence we keep the raw JSON object and only provide lenient accessors
//! for the few fields we need to compute with. JSON `null` values are treated as absent

use serde::{Deserialize,Serialize};
use serde_json::{Map,Value};

/// one aircraft's telemetry snapshot
#[derive(Deserialize,Serialize,Debug,Clone,Default,PartialEq)]
#[serde(transparent)]
pub struct AircraftState(Map<String,Value>);

impl AircraftState {
    /// the raw value for `key` unless it is missing or null
    pub fn get (&self, key: &str)->Option<&Value> {
        self.0.get( key).filter( |v| !v.is_null())
    }

    /// the reported callsign without the blank padding ADS-B uses for its fixed 8 char field
    pub fn callsign (&self)->Option<&str> {
        self.get("flight").and_then( Value::as_str).map( str::trim).filter( |s| !s.is_empty())
    }

    /// ICAO aircraft type designator (e.g. "A320")
    pub fn type_code (&self)->Option<&str> {
        self.get("t").and_then( Value::as_str).map( str::trim).filter( |s| !s.is_empty())
    }

    /// ADS-B emitter category (e.g. "A3" for large aircraft)
    pub fn category (&self)->Option<&str> {
        self.get("category").and_then( Value::as_str)
    }

    /// distance from the query point as computed by the provider (nautical miles for adsb.lol)
    pub fn distance (&self)->Option<f64> {
        self.get("dst").and_then( number_value)
    }

    pub fn latitude (&self)->Option<f64> { self.get("lat").and_then( number_value) }
    pub fn longitude (&self)->Option<f64> { self.get("lon").and_then( number_value) }

    /// (lat,lon) in decimal degrees if both are present and numeric
    pub fn position (&self)->Option<(f64,f64)> {
        Some( (self.latitude()?, self.longitude()?) )
    }
}

impl From<Value> for AircraftState {
    /// non-object values result in an empty state
    fn from (v: Value)->Self {
        match v {
            Value::Object(map) => AircraftState(map),
            _ => AircraftState::default()
        }
    }
}

/// the response of a snapshot query. We only need the aircraft list
#[derive(Deserialize,Debug,Default)]
pub struct SnapshotResponse {
    #[serde(default, deserialize_with="null_as_empty")]
    pub ac: Vec<AircraftState>,

    pub total: Option<u64>,
    pub now: Option<f64>,
}

fn null_as_empty<'de,D> (deserializer: D)->Result<Vec<AircraftState>,D::Error> where D: serde::Deserializer<'de> {
    Ok( Option::<Vec<AircraftState>>::deserialize( deserializer)?.unwrap_or_default() )
}

/// finite f64 from a JSON number or a numeric string
pub fn number_value (v: &Value)->Option<f64> {
    let x = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None
    }?;
    if x.is_finite() { Some(x) } else { None }
}

/// i64 from a JSON integer or an integer string. Fractional numbers (JSON or string) are truncated
pub fn integer_value (v: &Value)->Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else( || number_value(v).map( |x| x.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok().or_else( || number_value(v).map( |x| x.trunc() as i64)),
        _ => None
    }
}
