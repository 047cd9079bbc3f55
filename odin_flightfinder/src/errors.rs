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

use thiserror::Error;
use odin_common::net::OdinNetError;

pub type Result<T> = std::result::Result<T,OdinFlightError>;

#[derive(Error,Debug)]
pub enum OdinFlightError {

    #[error("missing parameter {0}")]
    MissingParameter(String),

    #[error("invalid parameter {0}")]
    InvalidParameter(String),

    #[error("no flights found within the specified radius")]
    NoFlightsFound,

    #[error("route data not found")]
    RouteDataNotFound,

    #[error("upstream unavailable {0}")]
    UpstreamUnavailable(String),

    #[error("malformed upstream data {0}")]
    MalformedUpstreamData(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("CSV error {0}")]
    CsvError( #[from] csv::Error),

    #[error("config error {0}")]
    ConfigError( #[from] odin_common::config::OdinConfigError),

    #[error("net error {0}")]
    NetError( #[from] OdinNetError),

    #[error("serde error {0}")]
    JsonError( #[from] serde_json::Error),
}

impl OdinFlightError {
    /// is this caused by the request itself (as opposed to upstream or local failures)
    pub fn is_client_error (&self)->bool {
        matches!( self, Self::MissingParameter(_) | Self::InvalidParameter(_))
    }

    /// did the query complete without finding what was asked for
    pub fn is_not_found (&self)->bool {
        matches!( self, Self::NoFlightsFound | Self::RouteDataNotFound)
    }

    /// did the snapshot or route server fail us
    pub fn is_upstream_error (&self)->bool {
        matches!( self, Self::UpstreamUnavailable(_) | Self::MalformedUpstreamData(_))
    }
}

/// classify a failed upstream query. Callers handle non-success status responses before this is used
pub fn upstream_error (e: OdinNetError)->OdinFlightError {
    match e {
        OdinNetError::ParseError(msg) => OdinFlightError::MalformedUpstreamData(msg),
        other => OdinFlightError::UpstreamUnavailable( other.to_string())
    }
}

macro_rules! invalid_parameter {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinFlightError::InvalidParameter( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_parameter;
