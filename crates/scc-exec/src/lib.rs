pub mod delivery;
pub mod mailto;
pub mod opener;
pub mod relay;

pub use delivery::*;
pub use mailto::*;
pub use opener::*;
pub use relay::*;
