pub mod account;
pub mod curp;
pub mod domain;
pub mod patterns;
pub mod storable;
pub mod uuid;

pub use account::{validate_login, validate_user_id};
pub use curp::{curp_check_digit, validate_curp};
pub use domain::{split_domain, validate_domain};
pub use storable::parse_storable;
pub use uuid::validate_uuid;
