mod app;
pub use app::MFun;
