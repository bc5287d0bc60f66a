//! In-memory REST backend for tests
//!
//! Answers `party`, `state` and `president` the way the real backend does,
//! including its duplicate-name and in-use checks.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;
use std::cell::RefCell;

use super::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::ApiResult;
use crate::models::{Party, President, PresidentRow, State};

#[derive(Default)]
struct Db {
    parties: Vec<Party>,
    states: Vec<State>,
    presidents: Vec<President>,
    next_id: u32,
}

impl Db {
    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn president_row(&self, p: &President) -> PresidentRow {
        PresidentRow {
            id: p.id,
            firstname: p.firstname.clone(),
            lastname: p.lastname.clone(),
            state: self
                .states
                .iter()
                .find(|s| s.id == p.state_id)
                .map(|s| s.name.clone())
                .unwrap_or_default(),
            party: p
                .party_id
                .and_then(|id| self.parties.iter().find(|party| party.id == id))
                .map(|party| party.name.clone()),
            inaugurated_year: p.inaugurated_year,
            years: p.years,
        }
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    db: RefCell<Db>,
    requests: RefCell<Vec<ApiRequest>>,
    fail_next: RefCell<Option<u16>>,
}

impl MemoryBackend {
    /// A few parties, states and presidents.
    pub fn seeded() -> Self {
        let backend = Self::default();
        {
            let mut db = backend.db.borrow_mut();
            for (name, founded, end) in [
                ("Federalist Party", 1789, Some(1824)),
                ("Democratic-Republican Party", 1792, Some(1825)),
                ("Republican Party", 1854, None),
                ("Whig", 1833, Some(1856)),
            ] {
                let id = db.next_id();
                db.parties.push(Party { id, name: name.into(), founded_year: founded, end_year: end });
            }
            for (name, abbreviation) in [("Virginia", "VA"), ("Massachusetts", "MA"), ("Illinois", "IL"), ("Ohio", "OH")] {
                let id = db.next_id();
                db.states.push(State { id, name: name.into(), abbreviation: abbreviation.into() });
            }
            let state = |db: &Db, name: &str| db.states.iter().find(|s| s.name == name).map(|s| s.id).unwrap();
            let party = |db: &Db, name: &str| db.parties.iter().find(|p| p.name == name).map(|p| p.id);
            for (first, last, st, pa, year, years) in [
                ("George", "Washington", "Virginia", None, 1789, 8),
                ("John", "Adams", "Massachusetts", Some("Federalist Party"), 1797, 4),
                ("Abraham", "Lincoln", "Illinois", Some("Republican Party"), 1861, 4),
            ] {
                let id = db.next_id();
                let state_id = state(&db, st);
                let party_id = pa.and_then(|name| party(&db, name));
                db.presidents.push(President {
                    id,
                    firstname: first.into(),
                    lastname: last.into(),
                    state_id,
                    party_id,
                    inaugurated_year: year,
                    years,
                });
            }
        }
        backend
    }

    /// Answer the next request with `status` and no field messages.
    pub fn fail_next(&self, status: u16) {
        *self.fail_next.borrow_mut() = Some(status);
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn last_body(&self) -> Option<String> {
        self.last_request().and_then(|r| r.body)
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let mut segments = request.path.split('/');
        let resource = segments.next().unwrap_or_default();
        let id = segments.next().and_then(|s| s.parse::<u32>().ok());
        let body = request.body.as_deref().unwrap_or_default();
        let mut db = self.db.borrow_mut();

        match (resource, request.method.as_str(), id) {
            ("party", "GET", None) => ok(&db.parties),
            ("state", "GET", None) => ok(&db.states),
            ("president", "GET", None) => {
                let rows: Vec<_> = db.presidents.iter().map(|p| db.president_row(p)).collect();
                ok(&rows)
            }
            ("party", "GET", Some(id)) => match db.parties.iter().find(|p| p.id == id) {
                Some(p) => ok(p),
                None => missing("Party"),
            },
            ("state", "GET", Some(id)) => match db.states.iter().find(|s| s.id == id) {
                Some(s) => ok(s),
                None => missing("State"),
            },
            ("president", "GET", Some(id)) => match db.presidents.iter().find(|p| p.id == id) {
                Some(p) => ok(p),
                None => missing("President"),
            },

            ("party", "POST", None) | ("party", "PUT", None) => {
                let Ok(mut party) = serde_json::from_str::<Party>(body) else {
                    return bad_request("party", "Malformed party.");
                };
                if db.parties.iter().any(|p| p.name == party.name && p.id != party.id) {
                    return bad_request("name", &format!("Party {} already exists.", party.name));
                }
                if request.method == Method::POST {
                    party.id = db.next_id();
                    db.parties.push(party.clone());
                } else {
                    match db.parties.iter_mut().find(|p| p.id == party.id) {
                        Some(slot) => *slot = party.clone(),
                        None => return missing("Party"),
                    }
                }
                ok(&party)
            }
            ("state", "POST", None) | ("state", "PUT", None) => {
                let Ok(mut state) = serde_json::from_str::<State>(body) else {
                    return bad_request("state", "Malformed state.");
                };
                if db.states.iter().any(|s| s.name == state.name && s.id != state.id) {
                    return bad_request("name", &format!("State {} already exists.", state.name));
                }
                if request.method == Method::POST {
                    state.id = db.next_id();
                    db.states.push(state.clone());
                } else {
                    match db.states.iter_mut().find(|s| s.id == state.id) {
                        Some(slot) => *slot = state.clone(),
                        None => return missing("State"),
                    }
                }
                ok(&state)
            }
            ("president", "POST", None) | ("president", "PUT", None) => {
                let Ok(mut president) = serde_json::from_str::<President>(body) else {
                    return bad_request("president", "Malformed president.");
                };
                if !db.states.iter().any(|s| s.id == president.state_id) {
                    return bad_request("stateId", "State does not exist.");
                }
                if request.method == Method::POST {
                    president.id = db.next_id();
                    db.presidents.push(president.clone());
                } else {
                    match db.presidents.iter_mut().find(|p| p.id == president.id) {
                        Some(slot) => *slot = president.clone(),
                        None => return missing("President"),
                    }
                }
                ok(&president)
            }

            ("party", "DELETE", Some(id)) => {
                if !db.parties.iter().any(|p| p.id == id) {
                    return missing("Party");
                }
                if db.presidents.iter().any(|p| p.party_id == Some(id)) {
                    return bad_request("id", "Party has presidents and cannot be deleted.");
                }
                db.parties.retain(|p| p.id != id);
                empty()
            }
            ("state", "DELETE", Some(id)) => {
                if !db.states.iter().any(|s| s.id == id) {
                    return missing("State");
                }
                db.states.retain(|s| s.id != id);
                empty()
            }
            ("president", "DELETE", Some(id)) => {
                if !db.presidents.iter().any(|p| p.id == id) {
                    return missing("President");
                }
                db.presidents.retain(|p| p.id != id);
                empty()
            }

            _ => ApiResponse { status: 404, body: String::new() },
        }
    }
}

#[async_trait(?Send)]
impl Transport for MemoryBackend {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(status) = self.fail_next.borrow_mut().take() {
            return Ok(ApiResponse { status, body: String::new() });
        }
        Ok(self.handle(&request))
    }
}

fn ok<S: Serialize + ?Sized>(value: &S) -> ApiResponse {
    ApiResponse {
        status: 200,
        body: serde_json::to_string(value).unwrap(),
    }
}

fn empty() -> ApiResponse {
    ApiResponse { status: 204, body: String::new() }
}

fn bad_request(field: &str, message: &str) -> ApiResponse {
    ApiResponse {
        status: 400,
        body: json!({ field: { "message": message } }).to_string(),
    }
}

fn missing(what: &str) -> ApiResponse {
    ApiResponse {
        status: 404,
        body: json!({ "id": { "message": format!("{what} does not exist.") } }).to_string(),
    }
}
