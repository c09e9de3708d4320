/// Substrate keys, one per record partition.
pub const PROJECTS_KEY: &str = "admin_projects";
pub const CERTS_KEY: &str = "admin_certs";
pub const BLOGS_KEY: &str = "admin_blogs";
pub const MESSAGES_KEY: &str = "admin_messages";

/// Session flag written on successful login, cleared on logout.
pub const SESSION_KEY: &str = "is_admin";

/// Reserved editor id meaning "not yet persisted". Never a stored id.
pub const NEW_ID_SENTINEL: &str = "new";
