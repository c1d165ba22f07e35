//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

pub mod admin {
    /// The only user allowed to see and manage the user list
    ///
    /// This is a UI convenience, not a security boundary: the cookie the id is
    /// compared against is fully attacker controllable so the backend must
    /// independently enforce authorization on `/users` and `/delete`.
    pub const ADMIN_USER_ID: &str = "383287544336613385";
}

pub mod client {
    /// Name of the cookie holding the base64 encoded session identity
    pub const CLIENT_USER_COOKIE: &str = "user";
}

pub mod path {
    mod path_spec;
    pub use path_spec::PathSpec;
    pub const PATH_DELETE: PathSpec = PathSpec::delete("/delete");
    pub const PATH_FILES: PathSpec = PathSpec::get("/files");
    pub const PATH_UPLOAD: PathSpec = PathSpec::post("/upload");
    pub const PATH_USERS: PathSpec = PathSpec::get("/users");
}
