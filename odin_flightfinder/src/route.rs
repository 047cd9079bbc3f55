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

//! flight route lookup by callsign. Routes are estimated by the aggregator from the callsign and the current
//! aircraft position, they are not flight plans

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize,Deserializer,Serialize};
use serde_json::{Map,Value};
use tracing::{debug,warn};
use odin_common::net::post_json_query;

use crate::aircraft::number_value;
use crate::errors::{OdinFlightError,Result,upstream_error};

/* #region route data *****************************************************************************/

#[derive(Deserialize,Debug,Clone,PartialEq,Default)]
pub struct RouteInfo {
    /// ordered IATA codes of origin, (stops) and destination
    #[serde(rename="_airport_codes_iata", default, deserialize_with="code_list")]
    pub route_iata: Vec<String>,

    /// ICAO codes joined by '-' (e.g. "KSFO-KJFK"), or "unknown"
    #[serde(default, deserialize_with="null_as_default")]
    pub airport_codes: String,

    #[serde(default, deserialize_with="null_as_default")]
    pub airline_code: String,

    #[serde(rename="_airports", default, deserialize_with="null_as_default")]
    pub airports: Vec<Airport>,
}

impl RouteInfo {
    pub fn origin (&self)->Option<&Airport> { self.airports.first() }
    pub fn destination (&self)->Option<&Airport> { self.airports.get(1) }

    /// do we know both origin and destination airport
    pub fn has_endpoints (&self)->bool { self.airports.len() >= 2 }
}

/// airport metadata as reported with a route. We only interpret coordinates, all other fields
/// (names, codes, location) are passed through
#[derive(Deserialize,Serialize,Debug,Clone,PartialEq,Default)]
pub struct Airport {
    #[serde(default, deserialize_with="lenient_f64")]
    pub lat: Option<f64>,

    #[serde(default, deserialize_with="lenient_f64")]
    pub lon: Option<f64>,

    #[serde(flatten)]
    pub metadata: Map<String,Value>,
}

impl Airport {
    pub fn position (&self)->Option<(f64,f64)> { Some( (self.lat?, self.lon?) ) }

    pub fn iata (&self)->Option<&str> { self.metadata.get("iata").and_then( Value::as_str) }
}

fn null_as_default<'de,D,T> (deserializer: D)->std::result::Result<T,D::Error> where D: Deserializer<'de>, T: Deserialize<'de> + Default {
    Ok( Option::<T>::deserialize( deserializer)?.unwrap_or_default() )
}

/// accepts numbers and numeric strings, anything else is None
fn lenient_f64<'de,D> (deserializer: D)->std::result::Result<Option<f64>,D::Error> where D: Deserializer<'de> {
    let v = Value::deserialize( deserializer)?;
    Ok( number_value( &v))
}

/// accepts both `["SFO","JFK"]` and `"SFO-JFK"`
fn code_list<'de,D> (deserializer: D)->std::result::Result<Vec<String>,D::Error> where D: Deserializer<'de> {
    let codes = match Value::deserialize( deserializer)? {
        Value::String(s) => s.split('-').map( str::trim).filter( |c| !c.is_empty()).map( String::from).collect(),
        Value::Array(list) => list.iter().filter_map( |v| v.as_str()).map( String::from).collect(),
        _ => Vec::new()
    };
    Ok(codes)
}

/* #endregion route data */

/* #region resolver *******************************************************************************/

#[async_trait]
pub trait RouteResolver: Send + Sync {
    /// route for a (trimmed, non-empty) callsign at the given position. `Ok(None)` if the upstream
    /// has no route for this flight
    async fn resolve (&self, callsign: &str, lat: f64, lon: f64)->Result<Option<RouteInfo>>;
}

#[derive(Serialize,Debug)]
struct RouteSetRequest<'a> {
    planes: [PlaneQuery<'a>;1]
}

#[derive(Serialize,Debug)]
struct PlaneQuery<'a> {
    callsign: &'a str,
    lat: f64,
    lng: f64,
}

/// resolves routes with the adsb.lol `routeset` API (POST a list of planes, get a list of routes)
pub struct AdsbLolRouteResolver {
    client: Client,
    url: String,
}

impl AdsbLolRouteResolver {
    pub fn new (client: Client, url: impl ToString)->Self {
        AdsbLolRouteResolver { client, url: url.to_string() }
    }
}

#[async_trait]
impl RouteResolver for AdsbLolRouteResolver {
    async fn resolve (&self, callsign: &str, lat: f64, lon: f64)->Result<Option<RouteInfo>> {
        let request = RouteSetRequest { planes: [PlaneQuery { callsign, lat, lng: lon }] };
        debug!("route query for {callsign} at {lat},{lon}");

        match post_json_query::<_,Vec<RouteInfo>>( &self.client, self.url.as_str(), &request).await {
            Ok(routes) => Ok( routes.into_iter().next()),
            Err(e) if e.is_status() => {
                debug!("no route for {callsign}: {e}");
                Ok(None)
            }
            Err(e) => Err( upstream_error(e))
        }
    }
}

/* #endregion resolver */
