/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
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

//! common utility functions for JSON based network queries

use std::time::Duration;
use reqwest::{header::{HeaderValue,ACCEPT,CONTENT_TYPE}, Client, IntoUrl, StatusCode, Response};
use serde::{de::DeserializeOwned,Serialize};
use tracing::debug;

use crate::define_error;

define_error!{ pub OdinNetError =
    NotFoundError(String) : "not found {0}",
    StatusError(StatusCode) : "response status {0}",
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    ParseError(String) : "parse error: {0}"
}

impl OdinNetError {
    /// did the server answer with a non-success status (as opposed to not answering at all or sending garbage)
    pub fn is_status (&self)->bool {
        matches!( self, OdinNetError::NotFoundError(_) | OdinNetError::StatusError(_))
    }
}

pub type Result<T> = std::result::Result<T, OdinNetError>;

/// create a client whose requests time out after the given duration. We never block indefinitely on upstream servers
pub fn client_with_timeout (timeout: Duration)->Result<Client> {
    Ok( Client::builder().timeout( timeout).build()? )
}

/// HTTP GET a JSON document and deserialize it. Everything but a `200 OK` response is an error
pub async fn get_json_query<U> (client: &Client, url: impl IntoUrl) -> Result<U> where U: DeserializeOwned {
    let url = url.into_url()?;
    let response = client.get( url.clone())
        .header( ACCEPT, HeaderValue::from_static("application/json"))
        .send().await?;

    json_ok_response( response, url.as_str()).await
}

/// HTTP POST a serializable value as JSON body and deserialize the JSON response
pub async fn post_json_query<T,U> (client: &Client, url: impl IntoUrl, data: &T) -> Result<U> where T: Serialize, U: DeserializeOwned {
    let url = url.into_url()?;
    let response = client.post( url.clone())
        .header( CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .header( ACCEPT, HeaderValue::from_static("application/json"))
        .json( data)
        .send().await?;

    json_ok_response( response, url.as_str()).await
}

async fn json_ok_response<U> (response: Response, url: &str)->Result<U> where U: DeserializeOwned {
    match response.status() {
        StatusCode::OK => from_json( response).await,
        StatusCode::NOT_FOUND => Err( OdinNetError::NotFoundError( url.to_string())),
        other => {
            debug!("{} responded with {}", url, other);
            Err( OdinNetError::StatusError(other))
        }
    }
}

pub async fn from_json<T> (response: Response)->Result<T> where T: DeserializeOwned {
    let bytes = response.bytes().await?;
    serde_json::from_slice( &bytes).map_err(|e| OdinNetError::ParseError(e.to_string()))
}
