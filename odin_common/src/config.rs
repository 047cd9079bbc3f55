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

//! RON config file lookup. Crates that have configs expand `define_load_config!{}` at their root, which
//! generates a `load_config(filename)` function that resolves the file in the following order:
//!
//!   1. `filename` is an existing path
//!   2. `$ODIN_HOME/configs/<crate>/<filename>`
//!   3. `$HOME/.odin/configs/<crate>/<filename>`
//!   4. `<crate-dir>/configs/<filename>` (the defaults that come with the source repository)

use std::{env, path::{Path,PathBuf}};
use serde::de::DeserializeOwned;
use crate::define_error;

pub const CONFIGS: &'static str = "configs";

define_error!{ pub OdinConfigError =
    IOError(#[from] std::io::Error) : "IO error {0}",
    RonSerdeError(#[from] ron::error::SpannedError) : "config serialize/deserialize RON error {0}",
    ResourceNotFoundError(String) : "resource not found {0}"
}

pub type Result<T> = std::result::Result<T, OdinConfigError>;

pub fn find_config_file (resource_crate: &str, crate_dir: &str, filename: &str) -> Option<PathBuf> {
    if let Ok(odin_home) = env::var("ODIN_HOME") {
        let path = Path::new( &odin_home).join( CONFIGS).join( resource_crate).join( filename);
        if path.is_file() { return Some(path) }
    }

    if let Ok(usr_home) = env::var("HOME") {
        let path = Path::new( &usr_home).join(".odin").join( CONFIGS).join( resource_crate).join( filename);
        if path.is_file() { return Some(path) }
    }

    let path = Path::new( crate_dir).join( CONFIGS).join( filename);
    if path.is_file() { Some(path) } else { None }
}

pub fn load_config_path<C,P> (path: P) -> Result<C> where C: DeserializeOwned, P: AsRef<Path> {
    let data = std::fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

/// this is the macro that needs to be expanded at the top of crates (lib.rs) that define configs.
/// Config users call the defined `load_config(..)` function to instantiate config structs
#[macro_export]
macro_rules! define_load_config {
    () => {
        mod configs {
            /// load config using the odin_common lookup mechanism (see `odin_common::config`)
            pub fn load_config<C> (filename: &str) -> $crate::config::Result<C> where C: serde::de::DeserializeOwned {
                let path = std::path::Path::new( filename);
                if path.is_file() {
                    return $crate::config::load_config_path( path)
                }

                match $crate::config::find_config_file( env!("CARGO_PKG_NAME"), env!("CARGO_MANIFEST_DIR"), filename) {
                    Some(path) => $crate::config::load_config_path( &path),
                    None => Err( $crate::config::OdinConfigError::ResourceNotFoundError( filename.to_string()))
                }
            }
        }
        pub use configs::*; // make load_config() visible at the crate level
    }
}
