mod explore;
mod home;
mod login;
mod placeholder;
mod user;

pub use explore::ExplorePage;
pub use home::HomePage;
pub use login::LoginPage;
pub use placeholder::{AccountPage, MessagesPage, SellPage};
pub use user::UserPage;
