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

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use odin_flightfinder::{load_config, FlightFinderConfig, pipeline::FlightFinder, query::FlightQuery};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "print the closest flight to a given position")]
pub struct Args {
    /// config file name or path
    #[arg(short,long, default_value = "flightfinder.ron")]
    pub config: String,

    /// latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// search radius
    #[arg(long)]
    pub radius: f64,

    /// 0: any aircraft, otherwise only airliners (config default if not set)
    #[arg(long)]
    pub prefer_airliners: Option<i64>,
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let config: FlightFinderConfig = load_config( &args.config)?;
    let finder = FlightFinder::from_config( &config)?;

    let prefer_airliners = args.prefer_airliners.map( |v| v != 0).unwrap_or( config.prefer_airliners);
    let query = FlightQuery::new( args.lat, args.lon, args.radius, prefer_airliners)?;

    let record = finder.find_closest( &query).await?;
    println!("{}", serde_json::to_string_pretty( &record)?);

    Ok(())
}
