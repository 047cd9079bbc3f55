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

use std::{collections::HashMap, fs::File, io::Read, path::Path};
use tracing::{debug,info};

use crate::errors::Result;

/// maps ICAO aircraft type designators to human readable model names.
///
/// The table is read once from a CSV file with a header row and `type_code,model` records. Records that do
/// not have exactly two fields are ignored, both fields are trimmed. If a type code occurs more than once
/// the first record wins. Lookup is exact (case sensitive)
#[derive(Debug,Clone,Default)]
pub struct AircraftModelRegistry {
    models: HashMap<String,String>
}

impl AircraftModelRegistry {
    pub fn load<P: AsRef<Path>> (path: P)->Result<Self> {
        let path = path.as_ref();
        let registry = Self::from_reader( File::open( path)?)?;
        info!("loaded {} aircraft models from {:?}", registry.len(), path);
        Ok(registry)
    }

    pub fn from_reader (reader: impl Read)->Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // we skip records with the wrong number of fields ourselves
            .trim( csv::Trim::All)
            .from_reader(reader);

        let mut models = HashMap::new();
        for res in csv_reader.records() {
            match res {
                Ok(rec) if rec.len() == 2 => {
                    models.entry( rec[0].to_string()).or_insert_with( || rec[1].to_string());
                }
                Ok(rec) => debug!("ignoring model record {:?}", rec),
                Err(e) => debug!("ignoring malformed model record: {e}")
            }
        }

        Ok( AircraftModelRegistry { models } )
    }

    pub fn from_entries<I,K,V> (entries: I)->Self where I: IntoIterator<Item=(K,V)>, K: ToString, V: ToString {
        let mut models = HashMap::new();
        for (k,v) in entries {
            models.entry( k.to_string()).or_insert_with( || v.to_string());
        }
        AircraftModelRegistry { models }
    }

    /// model name for a type code. Empty codes never match
    pub fn lookup (&self, type_code: &str)->Option<&str> {
        if type_code.is_empty() { return None }
        self.models.get( type_code).map( String::as_str)
    }

    pub fn len (&self)->usize { self.models.len() }
}
