pub mod provision_error;
pub mod user_provisioner;
