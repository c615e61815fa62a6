pub mod edit_window;
pub mod normalize;
pub mod pagination;

pub use edit_window::EditWindow;
pub use normalize::{format_phone_number, normalize_email};
pub use pagination::{Page, PageRequest};
