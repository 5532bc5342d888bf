mod create_comment;
mod delete_comment;
mod error;
mod load_comments;

#[cfg(test)]
pub mod tests;

pub use self::{create_comment::*, delete_comment::*, error::Error, load_comments::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;
