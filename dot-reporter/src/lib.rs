pub mod events;
pub mod host;
pub mod reporter;
pub mod shared;

pub mod prelude {
    pub use crate::events::prelude::*;
    pub use crate::host::prelude::*;
    pub use crate::reporter::prelude::*;
    pub use crate::shared::prelude::*;
}
