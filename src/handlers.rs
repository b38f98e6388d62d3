pub mod documents;
pub mod health;
pub mod market;
pub mod panels;
pub mod savings;
