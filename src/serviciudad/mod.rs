//! Domain of the inquiry client: configuration, the session gate, the debt
//! inquiry state machine, and the presentation helpers that turn a backend
//! response into HTML or terminal text.

pub mod api;
pub mod client_id;
pub mod config;
pub mod control;
pub mod errors;
pub mod format;
pub mod gate;
pub mod inactivity;
pub mod inquiry;
pub mod models;
pub mod navigator;
pub mod render;
pub mod route;
pub mod session;

pub use self::config::ApiConfig;
pub use self::errors::{InquiryError, LoginError};
pub use self::gate::SessionGate;
pub use self::inquiry::{InquiryClient, InquiryState};
pub use self::session::{MemoryStorage, Session, SessionContext, SessionStorage};
