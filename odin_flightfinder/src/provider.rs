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

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use odin_common::net::get_json_query;

use crate::aircraft::{AircraftState,SnapshotResponse};
use crate::errors::{Result,upstream_error};

/// source of live aircraft telemetry around a position
#[async_trait]
pub trait AircraftSnapshotProvider: Send + Sync {
    /// all aircraft within `radius` of (lat,lon). An empty list means there is no data for this area, which
    /// includes non-success responses of the upstream server
    async fn snapshot (&self, lat: f64, lon: f64, radius: f64)->Result<Vec<AircraftState>>;
}

/// adsb.lol (readsb compatible) area query `<base>/lat/<lat>/lon/<lon>/dist/<radius>`
pub struct AdsbLolSnapshotProvider {
    client: Client,
    base_url: String,
}

impl AdsbLolSnapshotProvider {
    pub fn new (client: Client, base_url: impl ToString)->Self {
        let base_url = base_url.to_string().trim_end_matches('/').to_string();
        AdsbLolSnapshotProvider { client, base_url }
    }

    pub fn query_url (&self, lat: f64, lon: f64, radius: f64)->String {
        format!("{}/lat/{}/lon/{}/dist/{}", self.base_url, lat, lon, radius)
    }
}

#[async_trait]
impl AircraftSnapshotProvider for AdsbLolSnapshotProvider {
    async fn snapshot (&self, lat: f64, lon: f64, radius: f64)->Result<Vec<AircraftState>> {
        let url = self.query_url( lat, lon, radius);
        debug!("snapshot query {url}");

        match get_json_query::<SnapshotResponse>( &self.client, url.as_str()).await {
            Ok(response) => Ok( response.ac),
            Err(e) if e.is_status() => {
                debug!("no snapshot data: {e}");
                Ok( Vec::new())
            }
            Err(e) => Err( upstream_error(e))
        }
    }
}
