pub mod candidates;
pub mod helpers;
pub mod home;
pub mod session;
pub mod survey;
pub mod users;
