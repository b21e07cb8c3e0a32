//! Tree explorer UI components.
//!
//! Every component reads the surface signals of
//! [`ExplorerContext`](crate::app::ExplorerContext) and reports clicks back
//! through its callbacks.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`Breadcrumb`] - Path from root to the current directory
//! - [`NodeList`] - Children of the current position
//! - [`ImageView`] - Modal image preview
//! - [`Loading`] - Loading indicator
//! - [`ErrorBanner`] - Last fetch failure

mod breadcrumb;
mod error_banner;
#[allow(clippy::module_inception)]
mod explorer;
mod image_view;
mod loading;
mod node_list;

pub use breadcrumb::Breadcrumb;
pub use error_banner::ErrorBanner;
pub use explorer::Explorer;
pub use image_view::ImageView;
pub use loading::Loading;
pub use node_list::NodeList;
