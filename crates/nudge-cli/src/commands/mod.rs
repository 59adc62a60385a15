pub mod answer;
pub mod dispatch;
pub mod due;
pub mod question;
pub mod schema;
pub mod shared;
