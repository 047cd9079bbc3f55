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

use std::{fs, path::Path};
use tracing::{info,warn};

use crate::errors::Result;

/// finds airline logo assets by airline code.
///
/// The asset names are enumerated once (sorted, hidden files excluded). Matching is a case insensitive
/// substring test of the airline code against the asset name, the first match in sort order is returned
#[derive(Debug,Clone,Default)]
pub struct LogoMatcher {
    assets: Vec<String>
}

impl LogoMatcher {
    pub fn load<P: AsRef<Path>> (dir: P)->Result<Self> {
        let dir = dir.as_ref();
        let mut assets = Vec::new();

        for entry in fs::read_dir( dir)? {
            let entry = entry?;
            if entry.path().is_file() { // follows symlinks
                if let Some(name) = entry.file_name().to_str() {
                    if !name.starts_with('.') { assets.push( name.to_string()) }
                }
            }
        }

        info!("found {} logo assets in {:?}", assets.len(), dir);
        Ok( Self::from_names( assets))
    }

    /// like `load` but a missing or unreadable directory just means there are no logos
    pub fn load_or_empty<P: AsRef<Path>> (dir: P)->Self {
        Self::load( dir.as_ref()).unwrap_or_else( |e| {
            warn!("no logo assets from {:?}: {e}", dir.as_ref());
            Self::default()
        })
    }

    pub fn from_names<I,S> (names: I)->Self where I: IntoIterator<Item=S>, S: ToString {
        let mut assets: Vec<String> = names.into_iter().map( |s| s.to_string()).collect();
        assets.sort();
        LogoMatcher { assets }
    }

    pub fn find (&self, airline_code: &str)->Option<&str> {
        let code = airline_code.trim().to_lowercase();
        if code.is_empty() { return None }
        self.assets.iter().find( |name| name.to_lowercase().contains( code.as_str())).map( String::as_str)
    }

    pub fn assets (&self)->&[String] { &self.assets }
    pub fn is_empty (&self)->bool { self.assets.is_empty() }
}
