pub mod balance;
pub mod bullets;
pub mod case_study;
pub mod chat;
pub mod diagram;
pub mod flip_cards;
pub mod grid_cards;
pub mod iceberg;
pub mod process;
pub mod quiz;
pub mod quote;
pub mod split_image;
pub mod stats;
pub mod timeline;
pub mod title;
pub mod toolbox;
pub mod word_cloud;
