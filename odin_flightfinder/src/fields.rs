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

//! the declarative table of telemetry fields that are copied from an [`AircraftState`] into a flight record.
//!
//! Each field has an output key, the source key it is read from, an extraction strategy and a default
//! that is used if the source value is absent or cannot be extracted. The defaults (including their types)
//! are part of the output contract and hence are kept exactly as clients expect them

use serde::{Serialize,Serializer,ser::SerializeMap};
use serde_json::Value;
use tracing::warn;

use crate::aircraft::{AircraftState,number_value,integer_value};

/// a telemetry value as it appears in the output record
#[derive(Serialize,Debug,Clone,PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Int(i64),
    Number(f64),
    Text(String),
    Json(Value),
}

impl FieldValue {
    pub fn as_f64 (&self)->Option<f64> {
        match self {
            FieldValue::Int(i) => Some(*i as f64),
            FieldValue::Number(x) => Some(*x),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok().filter( |x| x.is_finite()),
            FieldValue::Json(v) => number_value(v),
            FieldValue::Flag(_) => None
        }
    }

    pub fn as_i64 (&self)->Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            FieldValue::Number(x) => if x.is_finite() { Some( x.trunc() as i64) } else { None },
            FieldValue::Text(s) => s.trim().parse::<i64>().ok(),
            FieldValue::Json(v) => integer_value(v),
            FieldValue::Flag(_) => None
        }
    }

    pub fn as_str (&self)->Option<&str> {
        if let FieldValue::Text(s) = self { Some(s.as_str()) } else { None }
    }

    /// map a raw JSON value without conversion
    pub fn from_json (v: &Value)->Self {
        match v {
            Value::Bool(b) => FieldValue::Flag(*b),
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() { FieldValue::Int(i) }
                else if let Some(x) = n.as_f64() { FieldValue::Number(x) }
                else { FieldValue::Json(v.clone()) }
            }
            other => FieldValue::Json(other.clone())
        }
    }
}

/// const-constructible field defaults
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum FieldDefault {
    Flag(bool),
    Int(i64),
    Text(&'static str),
}

impl FieldDefault {
    pub fn value (&self)->FieldValue {
        match self {
            FieldDefault::Flag(b) => FieldValue::Flag(*b),
            FieldDefault::Int(i) => FieldValue::Int(*i),
            FieldDefault::Text(s) => FieldValue::Text(s.to_string()),
        }
    }
}

/// how a present source value is turned into a [`FieldValue`]
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Extract {
    /// pass through as reported
    Raw,
    /// strings pass through, numbers and flags are converted to their text
    Text,
    /// integer, fractional numbers and numeric strings are truncated
    Integer,
    /// finite number, from JSON numbers or numeric strings
    Number,
}

impl Extract {
    /// None if the value cannot be extracted with this strategy
    pub fn apply (&self, v: &Value)->Option<FieldValue> {
        match self {
            Extract::Raw => Some( FieldValue::from_json(v)),
            Extract::Text => match v {
                Value::String(s) => Some( FieldValue::Text( s.clone())),
                Value::Number(n) => Some( FieldValue::Text( n.to_string())),
                Value::Bool(b) => Some( FieldValue::Text( b.to_string())),
                _ => None
            }
            Extract::Integer => integer_value(v).map( FieldValue::Int),
            Extract::Number => number_value(v).map( FieldValue::Number),
        }
    }
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct FieldSpec {
    /// key in the output record
    pub key: &'static str,
    /// key in the telemetry snapshot
    pub source: &'static str,
    pub extract: Extract,
    pub default: FieldDefault,
}

const fn field (key: &'static str, source: &'static str, extract: Extract, default: FieldDefault)->FieldSpec {
    FieldSpec { key, source, extract, default }
}

use Extract::{Raw,Integer,Number};
use FieldDefault::{Flag,Int,Text};

/// the telemetry fields of a flight record, in output order. Note the mixed default types (e.g. `baro_rate`
/// defaults to 0 but `geom_rate` to "0"), which have to be preserved
pub const TELEMETRY_FIELDS: &[FieldSpec] = &[
    field( "flight",           "flight",           Extract::Text, Text("Unknown")),
    field( "type",             "t",                Extract::Text, Text("Unknown")),
    field( "emergency",        "emergency",        Raw,           Flag(false)),
    field( "category",         "category",         Extract::Text, Text("")),
    field( "squawk",           "squawk",           Raw,           Text("0")),
    field( "track",            "track",            Number,        Int(0)),
    field( "lat",              "lat",              Raw,           Text("0")),
    field( "lon",              "lon",              Raw,           Text("0")),
    field( "alt_baro",         "alt_baro",         Raw,           Text("0")),
    field( "alt_geo",          "alt_geo",          Raw,           Text("0")),
    field( "registration",     "r",                Raw,           Text("Unknown")),
    field( "gs",               "gs",               Raw,           Int(0)),
    field( "baro_rate",        "baro_rate",        Integer,       Int(0)),
    field( "geom_rate",        "geom_rate",        Integer,       Text("0")),
    field( "dir",              "dir",              Number,        Text("0")),
    field( "rsi",              "rsi",              Raw,           Text("0")),
    field( "dst",              "dst",              Raw,           Int(0)),
    field( "nav_modes",        "nav_modes",        Raw,           Text("Unknown")),
    field( "nav_qnh",          "nav_qnh",          Raw,           Text("0")),
    field( "nav_altitude_mcp", "nav_altitude_mcp", Raw,           Text("0")),
    field( "nav_heading",      "nav_heading",      Number,        Int(0)),
];

/// the telemetry fields that are rendered as compass heading labels
pub const HEADING_FIELDS: [&str;3] = ["track", "dir", "nav_heading"];

pub fn field_spec (key: &str)->Option<&'static FieldSpec> {
    TELEMETRY_FIELDS.iter().find( |f| f.key == key)
}

/// ordered telemetry key/value list of a flight record. Serializes as a map (to be flattened into the record)
#[derive(Debug,Clone,PartialEq,Default)]
pub struct Telemetry {
    fields: Vec<(&'static str,FieldValue)>
}

impl Telemetry {
    /// populate all [`TELEMETRY_FIELDS`] from a snapshot. Values that are present but cannot be extracted
    /// are replaced by their default and reported as warnings
    pub fn from_state (state: &AircraftState)->Self {
        let fields = TELEMETRY_FIELDS.iter().map( |spec| {
            let value = match state.get( spec.source) {
                Some(v) => spec.extract.apply(v).unwrap_or_else( || {
                    warn!("malformed {} value {}, using default", spec.source, v);
                    spec.default.value()
                }),
                None => spec.default.value()
            };
            (spec.key, value)
        }).collect();

        Telemetry { fields }
    }

    pub fn get (&self, key: &str)->Option<&FieldValue> {
        self.fields.iter().find( |(k,_)| *k == key).map( |(_,v)| v)
    }

    /// replace the value of an existing key or append a new one
    pub fn set (&mut self, key: &'static str, value: FieldValue) {
        match self.fields.iter_mut().find( |(k,_)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.fields.push( (key,value))
        }
    }

    pub fn iter (&self)->impl Iterator<Item=(&'static str,&FieldValue)> {
        self.fields.iter().map( |(k,v)| (*k,v))
    }
}

impl Serialize for Telemetry {
    fn serialize<S> (&self, serializer: S)->Result<S::Ok,S::Error> where S: Serializer {
        let mut map = serializer.serialize_map( Some(self.fields.len()))?;
        for (k,v) in &self.fields {
            map.serialize_entry( k, v)?;
        }
        map.end()
    }
}
