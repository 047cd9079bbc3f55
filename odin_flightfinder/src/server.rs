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

//! the `/closest_flight` web API

use std::{net::SocketAddr, sync::Arc};
use axum::{
    Json, Router,
    extract::{Query,State},
    http::StatusCode,
    response::{IntoResponse,Response},
    routing::get,
};
use serde::{Deserialize,Serialize};
use serde_json::json;
use tokio::{net::TcpListener, task::JoinHandle};
use tower_http::trace::TraceLayer;
use tracing::{info,warn,error};

use crate::{errors::OdinFlightError, pipeline::FlightFinder, query::ClosestFlightParams};

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct ServerConfig {
    pub sock_addr: SocketAddr,
}

impl ServerConfig {
    pub fn url (&self)->String { format!("http://{}", self.sock_addr) }
}

pub fn build_router (finder: Arc<FlightFinder>)->Router {
    Router::new()
        .route( "/closest_flight", get( closest_flight_handler))
        .with_state( finder)
        .layer( TraceLayer::new_for_http())
}

pub fn spawn_server_task (config: &ServerConfig, router: Router)->JoinHandle<std::io::Result<()>> {
    let sock_addr = config.sock_addr;
    tokio::spawn( async move {
        let listener = TcpListener::bind( sock_addr).await?;
        info!("listening on {}", sock_addr);
        axum::serve( listener, router).await
    })
}

async fn closest_flight_handler (State(finder): State<Arc<FlightFinder>>, Query(params): Query<ClosestFlightParams>)->Response {
    match finder.run( &params).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => error_response( &e)
    }
}

pub fn status_code (e: &OdinFlightError)->StatusCode {
    if e.is_client_error() {
        StatusCode::BAD_REQUEST
    } else if e.is_not_found() {
        StatusCode::NOT_FOUND
    } else if e.is_upstream_error() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// the message clients see. Internal failures are not exposed in detail
pub fn error_message (e: &OdinFlightError)->String {
    use OdinFlightError::*;
    match e {
        MissingParameter(_) => "Latitude, longitude, and radius are required parameters".to_string(),
        InvalidParameter(msg) => format!("Invalid parameter {msg}"),
        NoFlightsFound => "No flights found within the specified radius".to_string(),
        RouteDataNotFound => "Route data not found".to_string(),
        UpstreamUnavailable(_) | MalformedUpstreamData(_) => "Flight data service unavailable".to_string(),
        _ => "Internal server error".to_string()
    }
}

pub fn error_response (e: &OdinFlightError)->Response {
    let status = status_code(e);
    if status.is_server_error() { error!("closest flight query failed: {e}") } else { warn!("closest flight query rejected: {e}") }

    (status, Json( json!({ "error": error_message(e) }))).into_response()
}
