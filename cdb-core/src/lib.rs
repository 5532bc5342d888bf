pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use cdb_entities::{comment::*, id::*, time::*, user::*};
}

pub mod prelude {
    pub use crate::{entities::*, repositories::*, usecases};
}
