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

//! the closest flight query: snapshot, select, populate, enrich with model, route, distances and logo

use std::sync::Arc;
use tracing::{debug,info,warn};
use odin_common::net::client_with_timeout;

use crate::{
    FlightFinderConfig,
    aircraft::AircraftState,
    errors::{OdinFlightError,Result},
    logo::LogoMatcher,
    provider::{AircraftSnapshotProvider,AdsbLolSnapshotProvider},
    query::{ClosestFlightParams,FlightQuery},
    record::FlightRecord,
    registry::AircraftModelRegistry,
    route::{AdsbLolRouteResolver,RouteInfo,RouteResolver},
    selector::select_closest,
};

/// policy switches of a [`FlightFinder`]
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct FinderPolicy {
    /// used for queries that do not say if they prefer airliners
    pub prefer_airliners: bool,
    /// fail with [`OdinFlightError::RouteDataNotFound`] if there is no route for the closest aircraft
    pub require_route: bool,
}

impl Default for FinderPolicy {
    fn default ()->Self { FinderPolicy { prefer_airliners: true, require_route: false } }
}

/// read-only state that is shared between concurrent queries
pub struct FlightFinder {
    snapshots: Arc<dyn AircraftSnapshotProvider>,
    routes: Arc<dyn RouteResolver>,
    models: Arc<AircraftModelRegistry>,
    logos: Arc<LogoMatcher>,
    policy: FinderPolicy,
}

impl FlightFinder {
    pub fn new (
        snapshots: Arc<dyn AircraftSnapshotProvider>,
        routes: Arc<dyn RouteResolver>,
        models: Arc<AircraftModelRegistry>,
        logos: Arc<LogoMatcher>,
        policy: FinderPolicy
    )->Self {
        FlightFinder { snapshots, routes, models, logos, policy }
    }

    /// the adsb.lol based finder. This loads the model table (which has to exist) and the logo directory (which
    /// might be missing)
    pub fn from_config (config: &FlightFinderConfig)->Result<Self> {
        let client = client_with_timeout( config.request_timeout())?;
        let snapshots = AdsbLolSnapshotProvider::new( client.clone(), &config.snapshot_url);
        let routes = AdsbLolRouteResolver::new( client, &config.route_url);

        let models = AircraftModelRegistry::load( config.model_table_path())?;
        let logos = LogoMatcher::load_or_empty( config.logo_dir_path());

        let policy = FinderPolicy { prefer_airliners: config.prefer_airliners, require_route: config.require_route };
        Ok( Self::new( Arc::new(snapshots), Arc::new(routes), Arc::new(models), Arc::new(logos), policy) )
    }

    /// validate raw request parameters and run the query
    pub async fn run (&self, params: &ClosestFlightParams)->Result<FlightRecord> {
        let query = FlightQuery::from_params( params, self.policy.prefer_airliners)?;
        self.find_closest( &query).await
    }

    pub async fn find_closest (&self, query: &FlightQuery)->Result<FlightRecord> {
        info!("closest flight query for lat: {}, lon: {}, radius: {}", query.lat, query.lon, query.radius);

        let snapshot = self.snapshots.snapshot( query.lat, query.lon, query.radius).await?;
        info!("number of aircraft found: {}", snapshot.len());

        let (idx, state) = select_closest( &snapshot, query.prefer_airliners).ok_or( OdinFlightError::NoFlightsFound)?;
        debug!("closest aircraft at index {} with distance {:?}", idx, state.distance());

        let mut record = FlightRecord::from_state( state);
        record.model = state.type_code().and_then( |t| self.models.lookup(t)).map( String::from);
        if record.model.is_none() { debug!("no model for type code {:?}", state.type_code()) }
        record.set_rate_symbols( state);
        record.format_headings();

        match self.resolve_route( state).await? {
            Some(route) if self.policy.require_route && !route.has_endpoints() => {
                debug!("route for {} has no origin and destination", record.flight());
                return Err( OdinFlightError::RouteDataNotFound)
            }
            Some(route) => record.set_route( route, state.position()),
            None if self.policy.require_route => return Err( OdinFlightError::RouteDataNotFound),
            None => debug!("no route for {}", record.flight())
        }

        record.logo = self.logos.find( &record.airline_code).map( String::from);
        debug!("logo for airline code {:?}: {:?}", record.airline_code, record.logo);

        Ok(record)
    }

    /// the route for the selected aircraft, if it has a callsign and position. Malformed route responses
    /// count as missing routes
    async fn resolve_route (&self, state: &AircraftState)->Result<Option<RouteInfo>> {
        let (Some(callsign), Some((lat,lon))) = (state.callsign(), state.position()) else {
            debug!("no route lookup without callsign and position");
            return Ok(None)
        };

        match self.routes.resolve( callsign, lat, lon).await {
            Err(OdinFlightError::MalformedUpstreamData(msg)) => {
                warn!("ignoring malformed route data for {callsign}: {msg}");
                Ok(None)
            }
            other => other
        }
    }
}
