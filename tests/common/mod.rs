#![allow(dead_code)]

use std::{cell::RefCell, time::Duration};

use lastfm_sync::{
    error::SyncError,
    lastfm::{HttpResponse, Transport},
    types::QueryParams,
};

pub const HAPPY_BODY: &str = r#"{"toptracks":{"track":[{"name":"Song A","artist":{"name":"Artist X"},"playcount":"42"}]}}"#;

pub struct RecordedCall {
    pub url: String,
    pub params: QueryParams,
    pub timeout: Duration,
}

// Transport double that replays a canned response and records every call
pub struct FakeTransport {
    response: Result<HttpResponse, String>,
    pub calls: RefCell<Vec<RecordedCall>>,
}

impl FakeTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            response: Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            response: Err(reason.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_params(&self) -> QueryParams {
        self.calls
            .borrow()
            .last()
            .map(|call| call.params.clone())
            .unwrap_or_default()
    }
}

impl Transport for FakeTransport {
    fn get(
        &self,
        url: &str,
        params: &QueryParams,
        timeout: Duration,
    ) -> Result<HttpResponse, SyncError> {
        self.calls.borrow_mut().push(RecordedCall {
            url: url.to_string(),
            params: params.clone(),
            timeout,
        });

        self.response.clone().map_err(SyncError::LookupFailure)
    }
}
