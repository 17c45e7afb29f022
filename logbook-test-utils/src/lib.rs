pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{OTHER_OWNER_ID, TEST_OWNER_ID},
        fixtures::flight::factory,
        TestBuilder, TestContext, TestError,
    };
}
