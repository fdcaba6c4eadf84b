pub mod google_token;
pub mod google_user;

pub use google_token::GoogleTokenResponse;
pub use google_user::GoogleUserInfo;
