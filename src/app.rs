//! Demo route table.
//!
//! The canned routes served by the binary: plain HTML, JSON payloads,
//! one route per HTTP verb, and a 401 example. All responses are fixed;
//! the POST profile route additionally echoes inbound headers to the log.

use axum::http::StatusCode;
use serde::Serialize;

use crate::http::ResponseDescriptor;
use crate::routing::{Dispatcher, HandlerError};

const HELLO_HTML: &str = "<b>Hello World!<b>";

#[derive(Debug, Serialize)]
struct Profile {
    name: &'static str,
    age: u8,
    married: bool,
}

#[derive(Debug, Serialize)]
struct JsonExample {
    topic: &'static str,
    description: &'static str,
    status: bool,
}

#[derive(Debug, Serialize)]
struct VerbResponse {
    response: String,
}

fn profile() -> Profile {
    Profile {
        name: "Dhanu",
        age: 21,
        married: false,
    }
}

fn verb_response(verb: &str) -> Result<ResponseDescriptor, HandlerError> {
    Ok(ResponseDescriptor::json(&VerbResponse {
        response: format!("This is the {verb} Route!"),
    })?)
}

/// Build the dispatcher with the full demo route set.
pub fn demo_routes() -> Dispatcher {
    let mut routes = Dispatcher::new();

    routes.get("/", |_req| Ok(ResponseDescriptor::html(HELLO_HTML)));
    routes.post("/", |_req| Ok(ResponseDescriptor::html(HELLO_HTML)));

    routes.get("/route-handler", |_req| {
        Ok(ResponseDescriptor::json(&profile())?)
    });
    routes.post("/route-handler", |req| {
        // Response is fixed regardless of header contents.
        tracing::info!(headers = ?req.headers, "Inbound request headers");
        if let Some(value) = req.header("custom-header") {
            tracing::info!(value, "Custom header value");
        }
        Ok(ResponseDescriptor::json(&profile())?)
    });

    routes.get("/json-example", |_req| {
        Ok(ResponseDescriptor::json(&JsonExample {
            topic: "JSON Response in Express",
            description: "Returning a JSON object from a GET route",
            status: true,
        })?)
    });

    routes.get("/get-route", |_req| verb_response("GET"));
    routes.post("/post-route", |_req| verb_response("POST"));
    routes.put("/put-route", |_req| verb_response("PUT"));
    routes.delete("/delete-route", |_req| verb_response("DELETE"));

    routes.get("/unauthorized-route", |_req| {
        Ok(ResponseDescriptor::status_json(
            StatusCode::UNAUTHORIZED,
            &VerbResponse {
                response: "This is the UNAUTHORIZED Route!".to_string(),
            },
        )?)
    });

    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use axum::http::{HeaderMap, Method};

    use crate::http::RequestDescriptor;

    fn request(method: Method, path: &str) -> RequestDescriptor {
        RequestDescriptor::new(method, path, HeaderMap::new(), Bytes::new())
    }

    #[test]
    fn test_root_serves_hello_for_get_and_post() {
        let routes = demo_routes();

        for method in [Method::GET, Method::POST] {
            let response = routes.dispatch(&request(method, "/")).unwrap();
            assert_eq!(response.status, StatusCode::OK);
            assert_eq!(response.body, "<b>Hello World!<b>");
        }
    }

    #[test]
    fn test_profile_payload_is_exact() {
        let routes = demo_routes();

        let response = routes
            .dispatch(&request(Method::GET, "/route-handler"))
            .unwrap();
        assert_eq!(response.body, r#"{"name":"Dhanu","age":21,"married":false}"#);
    }

    #[test]
    fn test_unauthorized_route_is_401() {
        let routes = demo_routes();

        let response = routes
            .dispatch(&request(Method::GET, "/unauthorized-route"))
            .unwrap();
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body, r#"{"response":"This is the UNAUTHORIZED Route!"}"#);
    }

    #[test]
    fn test_every_verb_route_matches_only_its_verb() {
        let routes = demo_routes();
        let cases = [
            (Method::GET, "/get-route", "GET"),
            (Method::POST, "/post-route", "POST"),
            (Method::PUT, "/put-route", "PUT"),
            (Method::DELETE, "/delete-route", "DELETE"),
        ];

        for (method, path, verb) in cases {
            let response = routes.dispatch(&request(method.clone(), path)).unwrap();
            assert_eq!(response.status, StatusCode::OK);
            assert_eq!(
                response.body,
                format!(r#"{{"response":"This is the {verb} Route!"}}"#)
            );

            // Same path with a different verb falls through to the default.
            let other = if method == Method::GET {
                Method::POST
            } else {
                Method::GET
            };
            let response = routes.dispatch(&request(other, path)).unwrap();
            assert_eq!(response.status, StatusCode::NOT_FOUND);
        }
    }
}
