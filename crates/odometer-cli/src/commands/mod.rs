pub mod reel;
pub mod run;
pub mod show;
