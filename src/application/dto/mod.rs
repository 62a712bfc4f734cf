pub mod activity;
pub mod auth;
pub mod contacts;
pub mod crosspost;
pub mod posts;
pub mod serde_time;
pub mod users;

pub use activity::{ActivityDayDto, ActivityHeatmapDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use contacts::ContactDto;
pub use crosspost::{CrosspostConnectionDto, CrosspostResultDto};
pub use posts::{CreatePostResultDto, PostDto};
pub use users::{UserDto, UserProfileDto};
