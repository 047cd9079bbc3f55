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

mod common;

use serde_json::json;
use odin_flightfinder::{
    errors::OdinFlightError,
    fields::FieldValue,
    geodesy::distance_miles,
    pipeline::FinderPolicy,
    query::{ClosestFlightParams,FlightQuery},
    record::RATE_DOWN,
};
use common::*;

fn params (lat: Option<&str>, lon: Option<&str>, radius: Option<&str>, prefer: Option<&str>)->ClosestFlightParams {
    ClosestFlightParams {
        lat: lat.map(String::from),
        lon: lon.map(String::from),
        radius: radius.map(String::from),
        prefer_airliners: prefer.map(String::from),
    }
}

fn a320 ()->serde_json::Value {
    json!({
        "hex": "a12345", "flight": "UAL123  ", "t": "A320", "category": "A3", "dst": 10,
        "lat": 40.2, "lon": -73.1, "track": 90, "baro_rate": -5, "geom_rate": 64
    })
}

#[tokio::test]
async fn test_closest_flight_record () {
    let snapshots = MockSnapshots::with( vec![
        aircraft( json!({"flight": "N12345", "t": "C172", "category": "A1", "dst": 2})),
        aircraft( a320()),
    ]);
    let routes = MockRoutes::new( RouteBehavior::Route( json!({
        "_airport_codes_iata": "EWR-ORD",
        "airport_codes": "KEWR-KORD",
        "airline_code": "UAL",
        "_airports": [ {"iata": "EWR", "lat": 40.0, "lon": -73.0}, {"iata": "ORD", "lat": 41.0, "lon": -74.0}, {"iata": "XXX", "lat": 0, "lon": 0} ]
    })));
    let finder = new_finder( snapshots.clone(), routes.clone(), FinderPolicy::default());

    let record = finder.run( &params( Some("40.0"), Some("-73.0"), Some("50"), None)).await.unwrap();
    println!("{}", serde_json::to_string_pretty( &record).unwrap());

    assert_eq!( record.model.as_deref(), Some("Airbus A320"));
    assert_eq!( record.get("track"), Some( &FieldValue::Text("→ 90°".to_string())));
    assert_eq!( record.baro_rate_symbol, RATE_DOWN);
    assert_eq!( record.geom_rate_symbol, "&#9650;");

    assert_eq!( record.route_iata, vec!["EWR", "ORD"]);
    assert_eq!( record.airport_codes, "KEWR-KORD");
    assert_eq!( record.airline_code, "UAL");
    assert_eq!( record.airports.len(), 2);
    assert_eq!( record.logo.as_deref(), Some("ual.png"));

    assert_eq!( record.distance_journey, distance_miles( 40.0, -73.0, 41.0, -74.0) as i64);
    assert_eq!( record.distance_to_dest, distance_miles( 40.2, -73.1, 41.0, -74.0) as i64);
    assert!( record.distance_journey >= 0 && record.distance_to_dest >= 0);

    assert_eq!( snapshots.n_calls(), 1);
    assert_eq!( routes.requests(), vec![("UAL123".to_string(), 40.2, -73.1)]); // trimmed callsign, aircraft position
}

#[tokio::test]
async fn test_missing_parameter_makes_no_calls () {
    let snapshots = MockSnapshots::with( vec![ aircraft( a320())]);
    let routes = MockRoutes::new( RouteBehavior::Route( sfo_jfk_route()));
    let finder = new_finder( snapshots.clone(), routes.clone(), FinderPolicy::default());

    for p in [
        params( None, Some("-73.0"), Some("50"), None),
        params( Some("40.0"), None, Some("50"), None),
        params( Some("40.0"), Some("-73.0"), None, None),
        params( Some(""), Some("-73.0"), Some("50"), None),
    ] {
        let res = finder.run( &p).await;
        assert!( matches!( res, Err(OdinFlightError::MissingParameter(_))), "{res:?}");
    }

    assert_eq!( snapshots.n_calls(), 0);
    assert_eq!( routes.n_calls(), 0);
}

#[tokio::test]
async fn test_invalid_parameters () {
    let finder = new_finder( MockSnapshots::with( vec![]), MockRoutes::new( RouteBehavior::NoRoute), FinderPolicy::default());

    for p in [
        params( Some("north"), Some("-73.0"), Some("50"), None),
        params( Some("40.0"), Some("-73.0"), Some("-1"), None),
        params( Some("40.0"), Some("-73.0"), Some("50"), Some("yes")),
    ] {
        let res = finder.run( &p).await;
        assert!( matches!( res, Err(OdinFlightError::InvalidParameter(_))), "{res:?}");
    }
}

#[tokio::test]
async fn test_prefer_airliners_flag () {
    let snapshots = MockSnapshots::with( vec![
        aircraft( json!({"flight": "N12345", "t": "C172", "category": "A1", "dst": 2})),
        aircraft( a320()),
    ]);
    let finder = new_finder( snapshots, MockRoutes::new( RouteBehavior::NoRoute), FinderPolicy::default());

    let record = finder.run( &params( Some("40"), Some("-73"), Some("50"), Some("0"))).await.unwrap();
    assert_eq!( record.flight(), "N12345");
    assert_eq!( record.model, None); // not in registry

    let record = finder.run( &params( Some("40"), Some("-73"), Some("50"), Some("1"))).await.unwrap();
    assert_eq!( record.flight(), "UAL123  ");

    let q = FlightQuery::from_params( &params( Some("40"), Some("-73"), Some("50"), Some("2")), false).unwrap();
    assert!( q.prefer_airliners);
}

#[tokio::test]
async fn test_no_flights () {
    let finder = new_finder( MockSnapshots::with( vec![]), MockRoutes::new( RouteBehavior::NoRoute), FinderPolicy::default());
    let res = finder.run( &params( Some("40"), Some("-73"), Some("50"), None)).await;
    assert!( matches!( res, Err(OdinFlightError::NoFlightsFound)));

    // only general aviation around
    let snapshots = MockSnapshots::with( vec![ aircraft( json!({"flight": "N12345", "category": "A1", "dst": 2}))]);
    let routes = MockRoutes::new( RouteBehavior::NoRoute);
    let finder = new_finder( snapshots, routes.clone(), FinderPolicy::default());
    let res = finder.run( &params( Some("40"), Some("-73"), Some("50"), Some("1"))).await;
    assert!( matches!( res, Err(OdinFlightError::NoFlightsFound)));
    assert_eq!( routes.n_calls(), 0);
}

#[tokio::test]
async fn test_missing_route_degrades () {
    for behavior in [RouteBehavior::NoRoute, RouteBehavior::Malformed] {
        let finder = new_finder( MockSnapshots::with( vec![ aircraft( a320())]), MockRoutes::new( behavior), FinderPolicy::default());
        let record = finder.run( &params( Some("40"), Some("-73"), Some("50"), None)).await.unwrap();

        assert_eq!( record.model.as_deref(), Some("Airbus A320"));
        assert!( record.route_iata.is_empty());
        assert_eq!( record.airport_codes, "");
        assert_eq!( record.airline_code, "");
        assert!( record.airports.is_empty());
        assert_eq!( record.logo, None);
        assert_eq!( record.distance_journey, 0);
        assert_eq!( record.distance_to_dest, 0);
    }
}

#[tokio::test]
async fn test_require_route () {
    let policy = FinderPolicy { prefer_airliners: true, require_route: true };
    let finder = new_finder( MockSnapshots::with( vec![ aircraft( a320())]), MockRoutes::new( RouteBehavior::NoRoute), policy);

    let res = finder.run( &params( Some("40"), Some("-73"), Some("50"), None)).await;
    assert!( matches!( res, Err(OdinFlightError::RouteDataNotFound)));
}

#[tokio::test]
async fn test_require_route_needs_endpoints () {
    let policy = FinderPolicy { prefer_airliners: true, require_route: true };
    for route in [
        json!({"airport_codes": "unknown", "_airports": []}),
        json!({"airport_codes": "KSFO", "airline_code": "UAL", "_airports": [ {"iata": "SFO", "lat": 37.6, "lon": -122.4} ]}),
    ] {
        let finder = new_finder( MockSnapshots::with( vec![ aircraft( a320())]), MockRoutes::new( RouteBehavior::Route(route.clone())), policy);
        let res = finder.run( &params( Some("40"), Some("-73"), Some("50"), None)).await;
        assert!( matches!( res, Err(OdinFlightError::RouteDataNotFound)), "{route}: {res:?}");

        // the default policy still returns the partial route
        let finder = new_finder( MockSnapshots::with( vec![ aircraft( a320())]), MockRoutes::new( RouteBehavior::Route(route)), FinderPolicy::default());
        let record = finder.run( &params( Some("40"), Some("-73"), Some("50"), None)).await.unwrap();
        assert_eq!( record.distance_journey, 0);
    }

    let finder = new_finder( MockSnapshots::with( vec![ aircraft( a320())]), MockRoutes::new( RouteBehavior::Route( sfo_jfk_route())), policy);
    let record = finder.run( &params( Some("40"), Some("-73"), Some("50"), None)).await.unwrap();
    assert!( record.distance_journey > 0);
}

#[tokio::test]
async fn test_no_route_lookup_without_callsign_or_position () {
    let routes = MockRoutes::new( RouteBehavior::Route( sfo_jfk_route()));
    let snapshots = MockSnapshots::with( vec![
        aircraft( json!({"flight": "   ", "category": "A3", "dst": 1, "lat": 40.1, "lon": -73.2})),
    ]);
    let record = new_finder( snapshots, routes.clone(), FinderPolicy::default())
        .run( &params( Some("40"), Some("-73"), Some("50"), None)).await.unwrap();
    assert!( record.route_iata.is_empty());

    let snapshots = MockSnapshots::with( vec![
        aircraft( json!({"flight": "DAL12", "category": "A3", "dst": 1, "lat": 40.1})),
    ]);
    let record = new_finder( snapshots, routes.clone(), FinderPolicy::default())
        .run( &params( Some("40"), Some("-73"), Some("50"), None)).await.unwrap();
    assert_eq!( record.get("lon"), Some( &FieldValue::Text("0".to_string())));

    assert_eq!( routes.n_calls(), 0);
}

#[tokio::test]
async fn test_route_without_coordinates () {
    let routes = MockRoutes::new( RouteBehavior::Route( json!({
        "_airport_codes_iata": "SFO-JFK",
        "airline_code": "DAL",
        "_airports": [ {"iata": "SFO"}, {"iata": "JFK", "lat": 40.6, "lon": -73.8} ]
    })));
    let finder = new_finder( MockSnapshots::with( vec![ aircraft( a320())]), routes, FinderPolicy::default());
    let record = finder.run( &params( Some("40"), Some("-73"), Some("50"), None)).await.unwrap();

    assert_eq!( record.airports.len(), 2);
    assert_eq!( record.distance_journey, 0);
    assert_eq!( record.distance_to_dest, 0);
    assert_eq!( record.logo.as_deref(), Some("dal.png"));
}

#[tokio::test]
async fn test_upstream_failures () {
    let finder = new_finder( MockSnapshots::failing( SnapshotBehavior::Unavailable), MockRoutes::new( RouteBehavior::NoRoute), FinderPolicy::default());
    let res = finder.run( &params( Some("40"), Some("-73"), Some("50"), None)).await;
    assert!( matches!( res, Err(OdinFlightError::UpstreamUnavailable(_))));

    let finder = new_finder( MockSnapshots::with( vec![ aircraft( a320())]), MockRoutes::new( RouteBehavior::Unavailable), FinderPolicy::default());
    let res = finder.run( &params( Some("40"), Some("-73"), Some("50"), None)).await;
    assert!( matches!( res, Err(OdinFlightError::UpstreamUnavailable(_))));
}
