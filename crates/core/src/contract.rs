//! API contract shared by the server and the client.
//!
//! Each [`Route`] declares its method, path template, input validator and
//! the response validator for every status code it may return. The server
//! router mounts handlers at [`Route::router_path`] and checks outgoing
//! bodies with [`Route::check_response`]; the client validates its payloads
//! with [`Route::parse_input`] and parses server bodies with the same checks.
//!
//! ```text
//! GET  /api/profile          200 Profile          404 {message}
//! PUT  /api/profile          200 Profile          400 {message, field}
//! GET  /api/projects         200 [Project]
//! GET  /api/projects/:id     200 Project          400 {message, field}  404 {message}
//! GET  /api/testimonials     200 [Testimonial]
//! POST /api/contact          201 Message          400 {message, field}
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::schema::{self, Entity, ValidationError};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

/// HTTP methods used by the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
        }
    }
}

/// Validator applied to a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSchema {
    /// Full insert shape of the entity.
    Insert(Entity),
    /// Every field optional, types preserved.
    Partial(Entity),
}

impl InputSchema {
    pub fn parse(self, payload: &Value) -> Result<Map<String, Value>, ValidationError> {
        match self {
            Self::Insert(entity) => schema::validate(entity, payload),
            Self::Partial(entity) => schema::validate_partial(entity, payload),
        }
    }
}

/// Validator applied to a response body for one status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSchema {
    /// A single stored row.
    One(Entity),
    /// An array of stored rows.
    List(Entity),
    /// `{ "message": string, "field"?: string }`
    ValidationError,
    /// `{ "message": string }`
    NotFound,
}

impl ResponseSchema {
    pub fn check(self, body: &Value) -> Result<(), ValidationError> {
        match self {
            Self::One(entity) => schema::validate_record(entity, body),
            Self::List(entity) => {
                let items = body.as_array().ok_or_else(|| {
                    ValidationError::root(format!("expected a list of {}", entity.name()))
                })?;
                for (i, item) in items.iter().enumerate() {
                    schema::validate_record(entity, item).map_err(|e| ValidationError {
                        field: Some(match e.field {
                            Some(field) => format!("{i}.{field}"),
                            None => i.to_string(),
                        }),
                        message: e.message,
                    })?;
                }
                Ok(())
            }
            Self::ValidationError => {
                let object = error_object(body)?;
                match object.get("field") {
                    None | Some(Value::String(_)) => Ok(()),
                    Some(_) => Err(ValidationError::field("field", "field must be a string")),
                }
            }
            Self::NotFound => error_object(body).map(|_| ()),
        }
    }
}

fn error_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    let object = body
        .as_object()
        .ok_or_else(|| ValidationError::root("error body must be a JSON object"))?;
    match object.get("message") {
        Some(Value::String(_)) => Ok(object),
        _ => Err(ValidationError::field("message", "message must be a string")),
    }
}

/// A response did not match what the contract declares.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("{route} does not declare status {status}")]
    UndeclaredStatus { route: &'static str, status: u16 },

    #[error("{route} response with status {status} does not match the contract: {source}")]
    InvalidBody {
        route: &'static str,
        status: u16,
        #[source]
        source: ValidationError,
    },
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// One entry of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Stable identifier, e.g. `projects.get`.
    pub name: &'static str,
    pub method: Method,
    /// Path template with `:param` placeholders.
    pub path: &'static str,
    pub input: Option<InputSchema>,
    pub responses: &'static [(u16, ResponseSchema)],
}

impl Route {
    /// Validate a request body. Routes without a declared input accept
    /// anything and yield an empty map.
    pub fn parse_input(&self, payload: &Value) -> Result<Map<String, Value>, ValidationError> {
        match self.input {
            Some(input) => input.parse(payload),
            None => Ok(Map::new()),
        }
    }

    /// Validate a request body and decode it into the route's input DTO.
    pub fn decode_input<T: DeserializeOwned>(&self, payload: &Value) -> Result<T, ValidationError> {
        let entity = match self.input {
            Some(InputSchema::Insert(entity) | InputSchema::Partial(entity)) => entity,
            None => {
                return Err(ValidationError::root(format!(
                    "{} does not accept a request body",
                    self.name
                )))
            }
        };
        let normalized = self.parse_input(payload)?;
        crate::models::decode_normalized(entity, normalized)
    }

    /// The response validator declared for `status`, if any.
    pub fn response_schema(&self, status: u16) -> Option<ResponseSchema> {
        self.responses
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, schema)| *schema)
    }

    /// The declared 2xx status.
    pub fn success_status(&self) -> u16 {
        self.responses
            .iter()
            .map(|(s, _)| *s)
            .find(|s| (200..300).contains(s))
            .unwrap_or(200)
    }

    /// Check a response body against the validator declared for `status`.
    pub fn check_response(&self, status: u16, body: &Value) -> Result<(), ContractError> {
        let schema = self
            .response_schema(status)
            .ok_or(ContractError::UndeclaredStatus {
                route: self.name,
                status,
            })?;
        schema.check(body).map_err(|source| ContractError::InvalidBody {
            route: self.name,
            status,
            source,
        })
    }

    /// Fill the `:param` placeholders of the path template.
    ///
    /// Parameters with no matching placeholder are ignored.
    pub fn url(&self, params: &[(&str, &str)]) -> String {
        let mut url = self.path.to_string();
        for (key, value) in params {
            url = url.replace(&format!(":{key}"), value);
        }
        url
    }

    /// The path template in the router's `{param}` syntax.
    pub fn router_path(&self) -> String {
        self.path
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(param) => format!("{{{param}}}"),
                None => segment.to_string(),
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Whether a concrete request path matches this route's template.
    pub fn matches_path(&self, path: &str) -> bool {
        let template: Vec<&str> = self.path.split('/').collect();
        let actual: Vec<&str> = path.split('/').collect();
        template.len() == actual.len()
            && template
                .iter()
                .zip(&actual)
                .all(|(t, a)| (t.starts_with(':') && !a.is_empty()) || t == a)
    }
}

pub const PROFILE_GET: Route = Route {
    name: "profile.get",
    method: Method::Get,
    path: "/api/profile",
    input: None,
    responses: &[
        (200, ResponseSchema::One(Entity::Profile)),
        (404, ResponseSchema::NotFound),
    ],
};

pub const PROFILE_UPDATE: Route = Route {
    name: "profile.update",
    method: Method::Put,
    path: "/api/profile",
    input: Some(InputSchema::Partial(Entity::Profile)),
    responses: &[
        (200, ResponseSchema::One(Entity::Profile)),
        (400, ResponseSchema::ValidationError),
    ],
};

pub const PROJECTS_LIST: Route = Route {
    name: "projects.list",
    method: Method::Get,
    path: "/api/projects",
    input: None,
    responses: &[(200, ResponseSchema::List(Entity::Project))],
};

pub const PROJECT_GET: Route = Route {
    name: "projects.get",
    method: Method::Get,
    path: "/api/projects/:id",
    input: None,
    responses: &[
        (200, ResponseSchema::One(Entity::Project)),
        (400, ResponseSchema::ValidationError),
        (404, ResponseSchema::NotFound),
    ],
};

pub const TESTIMONIALS_LIST: Route = Route {
    name: "testimonials.list",
    method: Method::Get,
    path: "/api/testimonials",
    input: None,
    responses: &[(200, ResponseSchema::List(Entity::Testimonial))],
};

pub const CONTACT_CREATE: Route = Route {
    name: "contact.create",
    method: Method::Post,
    path: "/api/contact",
    input: Some(InputSchema::Insert(Entity::Message)),
    responses: &[
        (201, ResponseSchema::One(Entity::Message)),
        (400, ResponseSchema::ValidationError),
    ],
};

/// Every route of the API.
pub const ROUTES: &[Route] = &[
    PROFILE_GET,
    PROFILE_UPDATE,
    PROJECTS_LIST,
    PROJECT_GET,
    TESTIMONIALS_LIST,
    CONTACT_CREATE,
];

/// Find the route serving `method` on a concrete request path.
pub fn find(method: Method, path: &str) -> Option<&'static Route> {
    ROUTES
        .iter()
        .find(|r| r.method == method && r.matches_path(path))
}

/// Parse the `:id` path parameter.
pub fn parse_path_id(raw: &str) -> Result<DbId, ValidationError> {
    raw.parse::<DbId>()
        .map_err(|_| ValidationError::field("id", "id must be an integer"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn project_row(id: i64, order: i32) -> Value {
        json!({
            "id": id,
            "title": "t",
            "description": "d",
            "videoUrl": "v",
            "thumbnailUrl": null,
            "displayOrder": order
        })
    }

    #[test]
    fn url_fills_placeholders() {
        assert_eq!(PROJECT_GET.url(&[("id", "12")]), "/api/projects/12");
        assert_eq!(PROJECTS_LIST.url(&[("id", "12")]), "/api/projects");
    }

    #[test]
    fn router_path_uses_brace_syntax() {
        assert_eq!(PROJECT_GET.router_path(), "/api/projects/{id}");
        assert_eq!(PROFILE_GET.router_path(), "/api/profile");
    }

    #[test]
    fn find_matches_method_and_template() {
        assert_eq!(find(Method::Get, "/api/projects/3"), Some(&PROJECT_GET));
        assert_eq!(find(Method::Put, "/api/profile"), Some(&PROFILE_UPDATE));
        assert_eq!(find(Method::Post, "/api/projects"), None);
        assert_eq!(find(Method::Get, "/api/projects/"), None);
    }

    #[test]
    fn route_names_are_unique() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.name, b.name);
                assert!(!(a.method == b.method && a.path == b.path));
            }
        }
    }

    #[test]
    fn success_status_is_declared() {
        assert_eq!(CONTACT_CREATE.success_status(), 201);
        assert_eq!(PROFILE_GET.success_status(), 200);
    }

    #[test]
    fn contact_input_uses_message_insert_schema() {
        let err = CONTACT_CREATE
            .parse_input(&json!({"name": "Jane", "message": "Hi"}))
            .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("email"));
    }

    #[test]
    fn profile_update_input_is_partial() {
        let parsed = PROFILE_UPDATE.parse_input(&json!({"name": "New"})).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn list_response_reports_item_index() {
        let body = json!([project_row(1, 0), {"id": 2, "title": "t"}]);
        let err = PROJECTS_LIST.check_response(200, &body).unwrap_err();
        assert_matches!(
            err,
            ContractError::InvalidBody { status: 200, ref source, .. }
                if source.field.as_deref() == Some("1.description")
        );
    }

    #[test]
    fn list_response_accepts_rows() {
        PROJECTS_LIST
            .check_response(200, &json!([project_row(1, 0), project_row(2, 1)]))
            .unwrap();
    }

    #[test]
    fn undeclared_status_is_rejected() {
        let err = PROJECTS_LIST.check_response(404, &json!({"message": "x"})).unwrap_err();
        assert_matches!(err, ContractError::UndeclaredStatus { status: 404, .. });
    }

    #[test]
    fn error_bodies_are_checked() {
        PROJECT_GET
            .check_response(404, &json!({"message": "Project not found"}))
            .unwrap();
        assert!(PROJECT_GET.check_response(404, &json!({"error": "x"})).is_err());
        CONTACT_CREATE
            .check_response(400, &json!({"message": "email is required", "field": "email"}))
            .unwrap();
        assert!(CONTACT_CREATE
            .check_response(400, &json!({"message": "m", "field": 3}))
            .is_err());
    }

    #[test]
    fn parse_path_id_rejects_non_integers() {
        assert_eq!(parse_path_id("42").unwrap(), 42);
        let err = parse_path_id("abc").unwrap_err();
        assert_eq!(err.field.as_deref(), Some("id"));
    }

    #[test]
    fn decode_input_produces_typed_dto() {
        use crate::models::{NewMessage, ProfileUpdate};

        let message: NewMessage = CONTACT_CREATE
            .decode_input(&json!({"name": "Jane", "email": "jane@x.com", "message": "Hi"}))
            .unwrap();
        assert_eq!(message.email, "jane@x.com");

        let update: ProfileUpdate = PROFILE_UPDATE.decode_input(&json!({})).unwrap();
        assert!(update.is_empty());

        let err = PROJECTS_LIST
            .decode_input::<ProfileUpdate>(&json!({}))
            .unwrap_err();
        assert_eq!(err.field, None);
    }
}
