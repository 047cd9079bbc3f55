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

//! find the aircraft closest to a ground position and enrich it with route, model and logo information.
//!
//! Live aircraft positions and flight routes are obtained from the [adsb.lol](https://adsb.lol) aggregator
//! through the [`provider::AircraftSnapshotProvider`] and [`route::RouteResolver`] collaborator traits, the
//! result is a flat [`record::FlightRecord`] that is served as JSON by the `serve_flights` web server or printed
//! by the `closest_flight` command line tool

use std::{path::{Path,PathBuf}, time::Duration};
use serde::{Deserialize,Serialize};
use odin_common::define_load_config;

pub mod errors;
pub mod geodesy;
pub mod heading;
pub mod aircraft;
pub mod fields;
pub mod record;
pub mod route;
pub mod registry;
pub mod logo;
pub mod provider;
pub mod selector;
pub mod query;
pub mod pipeline;
pub mod server;

use server::ServerConfig;

define_load_config!{}

/* #region config ************************************************************************************/

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct FlightFinderConfig {
    pub server: ServerConfig,

    /// base URL of the aircraft snapshot API (e.g. "https://api.adsb.lol/v2")
    pub snapshot_url: String,

    /// URL of the route set API (e.g. "https://api.adsb.lol/api/0/routeset")
    pub route_url: String,

    /// per request timeout for upstream queries
    #[serde(default="default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// CSV file with `type_code,model` rows
    pub model_table: String,

    /// directory with airline logo files
    pub logo_dir: String,

    /// default for requests that do not specify `preferAirliners`
    #[serde(default="default_prefer_airliners")]
    pub prefer_airliners: bool,

    /// fail with "route data not found" instead of returning records without route information
    #[serde(default)]
    pub require_route: bool,
}

fn default_timeout_secs ()->u64 { 10 }
fn default_prefer_airliners ()->bool { true }

impl FlightFinderConfig {
    pub fn request_timeout (&self)->Duration { Duration::from_secs( self.request_timeout_secs) }

    pub fn model_table_path (&self)->PathBuf { resolve_resource_path( &self.model_table) }
    pub fn logo_dir_path (&self)->PathBuf { resolve_resource_path( &self.logo_dir) }
}

/// relative resource paths that do not exist in the current working dir are looked up in the crate dir
fn resolve_resource_path (path: &str)->PathBuf {
    let p = Path::new( path);
    if p.is_relative() && !p.exists() {
        let crate_path = Path::new( env!("CARGO_MANIFEST_DIR")).join( p);
        if crate_path.exists() { return crate_path }
    }
    p.to_path_buf()
}

/* #endregion config */
