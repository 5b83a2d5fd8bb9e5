pub mod beer;
pub mod beer_brewery;
pub mod beer_style;
pub mod brewery;
pub mod container;
pub mod location;
pub mod review;
pub mod storage;
pub mod style;
