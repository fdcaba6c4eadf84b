pub mod authenticated_session;
pub mod credential_pair;

pub use authenticated_session::AuthenticatedSession;
pub use credential_pair::CredentialPair;
