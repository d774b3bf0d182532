pub mod error;
pub mod model;
pub mod number;
pub mod price;
pub mod repository;
