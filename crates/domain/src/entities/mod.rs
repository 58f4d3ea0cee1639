pub mod overview;
pub mod position;
pub mod vault;

// Re-export for easier access
pub use overview::LiquidityOverview;
pub use position::{LiquidityPositions, Position};
pub use vault::VaultData;
