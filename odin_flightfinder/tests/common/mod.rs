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

#![allow(unused)]

use std::sync::{Arc, Mutex, atomic::{AtomicUsize,Ordering}};
use async_trait::async_trait;
use serde_json::{json,Value};

use odin_flightfinder::{
    aircraft::AircraftState,
    errors::{OdinFlightError,Result},
    logo::LogoMatcher,
    pipeline::{FinderPolicy,FlightFinder},
    provider::AircraftSnapshotProvider,
    registry::AircraftModelRegistry,
    route::{RouteInfo,RouteResolver},
};

pub fn aircraft (v: Value)->AircraftState { AircraftState::from(v) }

pub enum SnapshotBehavior { Aircraft(Vec<AircraftState>), Unavailable, Malformed }

/// in-memory snapshot provider that counts its calls
pub struct MockSnapshots {
    pub behavior: SnapshotBehavior,
    pub calls: AtomicUsize,
}

impl MockSnapshots {
    pub fn with (aircraft: Vec<AircraftState>)->Arc<Self> {
        Arc::new( MockSnapshots { behavior: SnapshotBehavior::Aircraft(aircraft), calls: AtomicUsize::new(0) })
    }
    pub fn failing (behavior: SnapshotBehavior)->Arc<Self> {
        Arc::new( MockSnapshots { behavior, calls: AtomicUsize::new(0) })
    }
    pub fn n_calls (&self)->usize { self.calls.load( Ordering::SeqCst) }
}

#[async_trait]
impl AircraftSnapshotProvider for MockSnapshots {
    async fn snapshot (&self, _lat: f64, _lon: f64, _radius: f64)->Result<Vec<AircraftState>> {
        self.calls.fetch_add( 1, Ordering::SeqCst);
        match &self.behavior {
            SnapshotBehavior::Aircraft(list) => Ok( list.clone()),
            SnapshotBehavior::Unavailable => Err( OdinFlightError::UpstreamUnavailable("timeout".to_string())),
            SnapshotBehavior::Malformed => Err( OdinFlightError::MalformedUpstreamData("not json".to_string())),
        }
    }
}

pub enum RouteBehavior { Route(Value), NoRoute, Unavailable, Malformed }

/// in-memory route resolver that records the callsigns it was asked for
pub struct MockRoutes {
    pub behavior: RouteBehavior,
    pub requests: Mutex<Vec<(String,f64,f64)>>,
}

impl MockRoutes {
    pub fn new (behavior: RouteBehavior)->Arc<Self> {
        Arc::new( MockRoutes { behavior, requests: Mutex::new( Vec::new()) })
    }
    pub fn requests (&self)->Vec<(String,f64,f64)> { self.requests.lock().unwrap().clone() }
    pub fn n_calls (&self)->usize { self.requests.lock().unwrap().len() }
}

#[async_trait]
impl RouteResolver for MockRoutes {
    async fn resolve (&self, callsign: &str, lat: f64, lon: f64)->Result<Option<RouteInfo>> {
        self.requests.lock().unwrap().push( (callsign.to_string(), lat, lon));
        match &self.behavior {
            RouteBehavior::Route(v) => Ok( Some( serde_json::from_value( v.clone()).unwrap())),
            RouteBehavior::NoRoute => Ok(None),
            RouteBehavior::Unavailable => Err( OdinFlightError::UpstreamUnavailable("connection refused".to_string())),
            RouteBehavior::Malformed => Err( OdinFlightError::MalformedUpstreamData("truncated".to_string())),
        }
    }
}

/// a SFO -> JFK route as adsb.lol reports it
pub fn sfo_jfk_route ()->Value {
    json!({
        "_airport_codes_iata": "SFO-JFK",
        "airport_codes": "KSFO-KJFK",
        "airline_code": "UAL",
        "callsign": "UAL123",
        "_airports": [
            { "iata": "SFO", "icao": "KSFO", "name": "San Francisco International Airport", "lat": 37.618999, "lon": -122.375 },
            { "iata": "JFK", "icao": "KJFK", "name": "John F Kennedy International Airport", "lat": "40.639801", "lon": "-73.7789" }
        ]
    })
}

pub fn models ()->Arc<AircraftModelRegistry> {
    Arc::new( AircraftModelRegistry::from_entries( [("A320","Airbus A320"), ("B738","Boeing 737-800")]))
}

pub fn logos ()->Arc<LogoMatcher> {
    Arc::new( LogoMatcher::from_names( ["aal.png", "dal.png", "ual.png"]))
}

pub fn new_finder (snapshots: Arc<MockSnapshots>, routes: Arc<MockRoutes>, policy: FinderPolicy)->FlightFinder {
    FlightFinder::new( snapshots, routes, models(), logos(), policy)
}
