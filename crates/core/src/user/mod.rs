//! User domain logic: model, identifier generation, persistence
//! orchestration, and the service boundary exposed to transport adapters.

mod error;
mod http_mapping;
mod id;
mod record;
mod repository;
mod service;
mod types;

pub use error::UserError;
pub use http_mapping::user_error_to_status_code;
pub use id::new_user_id;
pub use record::{attributes_to_user, user_to_attributes, ATTR_EMAIL, ENTITY_TYPE_USER};
pub use repository::UserRepository;
pub use service::UserService;
pub use types::{EntityMeta, User};
