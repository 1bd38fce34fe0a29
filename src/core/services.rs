pub mod answer;
pub mod option;
pub mod question;
pub mod user;
