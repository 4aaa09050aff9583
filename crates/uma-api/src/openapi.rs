//! OpenAPI 3.0 description of the HTTP surface, served at [`OPENAPI_PATH`].

use axum::Json;
use serde_json::{Value, json};

/// Route serving the OpenAPI document
pub const OPENAPI_PATH: &str = "/v3/api-docs";

const USER_TAG: &str = "User Management";

/// Build the OpenAPI document for the user endpoints.
pub fn document() -> Value {
    json!({
        "openapi": "3.0.1",
        "info": {
            "title": "User Management API",
            "version": "1.0.0",
            "description": "RESTful API for managing user information with full OpenAPI documentation",
            "contact": {
                "name": "API Support",
                "email": "support@example.com"
            },
            "license": {
                "name": "Apache 2.0",
                "url": "https://www.apache.org/licenses/LICENSE-2.0.html"
            }
        },
        "tags": [
            {
                "name": USER_TAG,
                "description": "APIs for managing user resources"
            }
        ],
        "paths": {
            "/users": {
                "get": {
                    "tags": [USER_TAG],
                    "summary": "Get all users",
                    "description": "Retrieves a complete list of all users in the system. Returns an empty list if no users are available.",
                    "operationId": "getAllUsers",
                    "responses": {
                        "200": {
                            "description": "Successfully retrieved list of users",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/User" }
                                    }
                                }
                            }
                        },
                        "500": { "description": "Internal server error" }
                    }
                }
            },
            "/users/{id}": {
                "get": {
                    "tags": [USER_TAG],
                    "summary": "Get user by ID",
                    "description": "Retrieves a specific user by their unique identifier. Returns 404 Not Found if the user does not exist.",
                    "operationId": "getUserById",
                    "parameters": [
                        {
                            "name": "id",
                            "in": "path",
                            "description": "Unique identifier of the user to retrieve",
                            "required": true,
                            "schema": { "type": "integer", "format": "int64" },
                            "example": 1
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Successfully retrieved the user",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/User" }
                                }
                            }
                        },
                        "404": { "description": "User not found with the provided ID" },
                        "500": { "description": "Internal server error" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "User": {
                    "type": "object",
                    "description": "User entity representing a user in the system",
                    "required": ["name", "email"],
                    "properties": {
                        "id": {
                            "type": "integer",
                            "format": "int64",
                            "description": "Unique identifier of the user",
                            "readOnly": true,
                            "example": 1
                        },
                        "name": {
                            "type": "string",
                            "description": "Full name of the user",
                            "example": "John Doe"
                        },
                        "email": {
                            "type": "string",
                            "format": "email",
                            "description": "Email address of the user",
                            "example": "john.doe@example.com"
                        }
                    }
                }
            }
        }
    })
}

/// Handler returning [`document`] as JSON
pub async fn openapi_json() -> Json<Value> {
    Json(document())
}
