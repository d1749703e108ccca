mod message;
mod page;
pub mod pages;
mod toast;

pub use message::{PageMessage, ToastLevel};
pub use page::{Page, PageKind};
pub use toast::{Toast, Toasts};
