mod session;
mod view;

pub use session::Session;
pub use view::View;
