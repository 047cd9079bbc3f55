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

use serde::Serialize;

use crate::{
    aircraft::AircraftState,
    fields::{FieldValue,Telemetry,HEADING_FIELDS},
    geodesy::truncated_miles,
    heading::format_heading,
    route::{Airport,RouteInfo},
};

/// glyph (HTML entity) for descending aircraft
pub const RATE_DOWN: &str = "&#9660;";
/// glyph (HTML entity) for climbing aircraft
pub const RATE_UP: &str = "&#9650;";

/// trend glyph for a vertical rate: down for negative, up for positive and empty for level flight
pub fn rate_glyph (rate: i64)->&'static str {
    if rate < 0 { RATE_DOWN } else if rate > 0 { RATE_UP } else { "" }
}

/// trend glyph for a telemetry value that might be a number or a numeric string. Only the sign counts, i.e.
/// fractional rates get a glyph. Non-numeric values get none
pub fn rate_value_glyph (v: &FieldValue)->&'static str {
    match v.as_f64() {
        Some(r) if r < 0.0 => RATE_DOWN,
        Some(r) if r > 0.0 => RATE_UP,
        _ => ""
    }
}

fn reported_rate_glyph (state: &AircraftState, key: &str)->&'static str {
    state.get( key).map( |v| rate_value_glyph( &FieldValue::from_json(v))).unwrap_or("")
}

/// the flat output document for the closest aircraft
#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct FlightRecord {
    #[serde(flatten)]
    pub telemetry: Telemetry,

    pub model: Option<String>,

    pub baro_rate_symbol: &'static str,
    pub geom_rate_symbol: &'static str,

    pub route_iata: Vec<String>,
    pub airport_codes: String,
    pub airline_code: String,
    pub airports: Vec<Airport>,
    pub logo: Option<String>,

    pub distance_journey: i64,
    pub distance_to_dest: i64,
}

impl FlightRecord {
    /// a record with all telemetry fields populated from `state` and every derived field at its default
    pub fn from_state (state: &AircraftState)->Self {
        FlightRecord {
            telemetry: Telemetry::from_state( state),
            model: None,
            baro_rate_symbol: "",
            geom_rate_symbol: "",
            route_iata: Vec::new(),
            airport_codes: String::new(),
            airline_code: String::new(),
            airports: Vec::new(),
            logo: None,
            distance_journey: 0,
            distance_to_dest: 0,
        }
    }

    pub fn get (&self, key: &str)->Option<&FieldValue> { self.telemetry.get( key) }

    pub fn flight (&self)->&str { self.get("flight").and_then( FieldValue::as_str).unwrap_or("Unknown") }

    /// trend glyphs from the sign of the reported (not truncated) vertical rates
    pub fn set_rate_symbols (&mut self, state: &AircraftState) {
        self.baro_rate_symbol = reported_rate_glyph( state, "baro_rate");
        self.geom_rate_symbol = reported_rate_glyph( state, "geom_rate");
    }

    /// replace numeric heading fields by their "<glyph> <deg>°" label
    pub fn format_headings (&mut self) {
        for key in HEADING_FIELDS {
            if let Some(deg) = self.get( key).and_then( FieldValue::as_f64) {
                self.telemetry.set( key, FieldValue::Text( format_heading( deg)));
            }
        }
    }

    /// copy route data (the first two airports only) and compute journey distances. Distances stay 0 unless
    /// both airports have coordinates, `distance_to_dest` also requires the aircraft `position`
    pub fn set_route (&mut self, route: RouteInfo, position: Option<(f64,f64)>) {
        self.route_iata = route.route_iata;
        self.airport_codes = route.airport_codes;
        self.airline_code = route.airline_code;
        self.airports = route.airports.into_iter().take(2).collect();

        if let [origin, dest] = self.airports.as_slice() {
            if let (Some((olat,olon)), Some((dlat,dlon))) = (origin.position(), dest.position()) {
                self.distance_journey = truncated_miles( olat, olon, dlat, dlon);
                if let Some((lat,lon)) = position {
                    self.distance_to_dest = truncated_miles( lat, lon, dlat, dlon);
                }
            }
        }
    }
}
