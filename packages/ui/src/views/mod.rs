mod dashboard;
pub use dashboard::{Dashboard, DashboardTab};

mod landing;
pub use landing::Landing;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;
