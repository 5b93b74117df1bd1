pub mod connection;
pub mod error;
pub mod provisioner;
pub mod repositories;

pub use connection::connection_manager::ConnectionManager;
pub use error::{DbError, Result};
pub use provisioner::provision_error::{ProvisionError, Result as ProvisionResult};
pub use provisioner::user_provisioner::{BEGIN_IMMEDIATE, ProvisionedUser, UserProvisioner};
pub use repositories::user_group_repository::UserGroupRepository;
pub use repositories::user_repository::UserRepository;
