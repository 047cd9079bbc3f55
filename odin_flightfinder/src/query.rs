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

use serde::{Deserialize,Serialize};

use crate::errors::{OdinFlightError,Result,invalid_parameter};

/// the raw `/closest_flight` query parameters
#[derive(Deserialize,Serialize,Debug,Clone,Default)]
pub struct ClosestFlightParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub radius: Option<String>,

    #[serde(rename="preferAirliners")]
    pub prefer_airliners: Option<String>,
}

/// a validated closest flight query
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct FlightQuery {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    pub prefer_airliners: bool,
}

impl FlightQuery {
    pub fn new (lat: f64, lon: f64, radius: f64, prefer_airliners: bool)->Result<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err( invalid_parameter!("position {lat},{lon}"))
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err( invalid_parameter!("radius {radius}"))
        }
        Ok( FlightQuery { lat, lon, radius, prefer_airliners } )
    }

    /// validate raw parameters. lat, lon and radius are required, `preferAirliners` is an integer flag (0 means
    /// any aircraft) that falls back to `default_prefer_airliners`
    pub fn from_params (params: &ClosestFlightParams, default_prefer_airliners: bool)->Result<Self> {
        let lat = required( "lat", &params.lat)?;
        let lon = required( "lon", &params.lon)?;
        let radius = required( "radius", &params.radius)?;

        let lat = parse_f64( "lat", lat)?;
        let lon = parse_f64( "lon", lon)?;
        let radius = parse_f64( "radius", radius)?;

        let prefer_airliners = match present( &params.prefer_airliners) {
            Some(s) => s.parse::<i64>().map_err( |_| invalid_parameter!("preferAirliners {s}"))? != 0,
            None => default_prefer_airliners
        };

        Self::new( lat, lon, radius, prefer_airliners)
    }
}

fn present (p: &Option<String>)->Option<&str> {
    p.as_deref().map( str::trim).filter( |s| !s.is_empty())
}

fn required<'a> (name: &str, p: &'a Option<String>)->Result<&'a str> {
    present(p).ok_or_else( || OdinFlightError::MissingParameter( name.to_string()))
}

fn parse_f64 (name: &str, s: &str)->Result<f64> {
    s.parse::<f64>().map_err( |_| invalid_parameter!("{name} {s}"))
}
