pub mod anonymize;
pub mod health;
pub mod pages;
