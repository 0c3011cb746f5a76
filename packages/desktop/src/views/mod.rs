mod dashboard;
pub use dashboard::Dashboard;

mod home;
pub use home::Home;
