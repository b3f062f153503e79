pub mod member;
pub mod proposal;
pub mod recurring;
pub mod vault;

pub use member::*;
pub use proposal::*;
pub use recurring::*;
pub use vault::*;
