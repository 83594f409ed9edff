pub mod exercise;
pub mod fields;
pub mod from_row;
pub mod user;

pub use exercise::{AddExercise, AddExerciseResponse, Exercise, LogParams, NewExercise};
pub use fields::deserialize_optional_text;
pub use from_row::FromSqliteRow;
pub use user::{CreateUser, NewUserResponse, User};
