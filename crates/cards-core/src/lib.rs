pub mod descriptor;
pub mod error;
pub mod locale;
pub mod models;
pub mod registry;
pub mod render;
pub mod theme;
pub mod traits;
pub mod widget;

pub use descriptor::authoring_descriptor;
pub use error::{CardsError, Result};
pub use locale::Localizer;
pub use models::{Contributor, FetchRequest};
pub use registry::{ComponentRegistry, WIDGET_TAG};
pub use render::{render, CardView, Surface};
pub use theme::{Hue, Theme};
pub use traits::{AvatarArtist, ContributorSource, FetchDispatcher};
pub use widget::ContributorsWidget;
