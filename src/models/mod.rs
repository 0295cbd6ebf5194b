pub mod coordinates;
pub mod profile;
pub mod restaurant;
pub mod schedule;
pub mod spot;

pub use coordinates::Coordinates;
pub use profile::TravelerProfile;
pub use restaurant::{BizType, RestaurantPlace};
pub use schedule::{Pacing, PlaceRef, ScheduleStep, StepKind, WeatherMode};
pub use spot::{IndoorOutdoor, Spot};
