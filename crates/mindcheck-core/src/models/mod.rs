pub mod answer;
pub mod category;
pub mod question;
pub mod session;
