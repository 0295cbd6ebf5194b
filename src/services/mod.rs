pub mod planner;
pub mod recommend;
pub mod selection;
