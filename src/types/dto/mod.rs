// Wire models - poem-openapi objects, response enums and input validators
pub mod body;
pub mod clients;
pub mod common;
pub mod items;
