mod ids;
mod servers;
mod tags;
mod reviews;
mod gallery;
mod user;

pub use ids::*;
pub use servers::*;
pub use tags::*;
pub use reviews::*;
pub use gallery::*;
pub use user::*;
