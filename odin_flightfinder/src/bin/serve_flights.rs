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

use std::sync::Arc;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use odin_flightfinder::{
    load_config, FlightFinderConfig,
    pipeline::FlightFinder,
    server::{build_router,spawn_server_task},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "serve the closest flight to a given position as JSON")]
pub struct Args {
    /// config file name or path
    #[arg(short,long, default_value = "flightfinder.ron")]
    pub config: String,
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let config: FlightFinderConfig = load_config( &args.config)?;

    let finder = Arc::new( FlightFinder::from_config( &config)?);
    let router = build_router( finder);

    println!("serving {}/closest_flight?lat=<deg>&lon=<deg>&radius=<nm>[&preferAirliners=0|1]", config.server.url());
    let server_task = spawn_server_task( &config.server, router);
    Ok( server_task.await?? )
}
