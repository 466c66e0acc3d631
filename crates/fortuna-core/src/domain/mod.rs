pub mod identity;
pub mod phone;
pub mod wheel;

pub use identity::{InitData, WebAppUser};
pub use phone::{clean_phone_input, normalize_phone};
pub use wheel::{WheelLayout, DEFAULT_EXCLUDED_SECTORS, DEFAULT_SECTOR_COUNT};
