use serde::{Deserialize, Serialize};

/// Top-level sections a status document may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    VaultData,
    LiquidityOverview,
    LiquidityPositions,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [
        SectionKind::VaultData,
        SectionKind::LiquidityOverview,
        SectionKind::LiquidityPositions,
    ];

    /// JSON key of the section.
    pub fn key(&self) -> &'static str {
        match self {
            Self::VaultData => "vaultData",
            Self::LiquidityOverview => "liquidityOverview",
            Self::LiquidityPositions => "liquidityPositions",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::VaultData => "Vault Data",
            Self::LiquidityOverview => "Liquidity Overview",
            Self::LiquidityPositions => "Liquidity Positions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VaultField {
    VaultAddress,
    Token0Address,
    Token0Decimals,
    Token0Symbol,
    Token1Address,
    Token1Decimals,
    Token1Symbol,
    FeeTier,
}

impl VaultField {
    /// Fields shown when an endpoint does not configure its own list.
    pub const STANDARD: [VaultField; 7] = [
        VaultField::VaultAddress,
        VaultField::Token0Address,
        VaultField::Token0Decimals,
        VaultField::Token0Symbol,
        VaultField::Token1Address,
        VaultField::Token1Decimals,
        VaultField::Token1Symbol,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::VaultAddress => "vaultAddress",
            Self::Token0Address => "token0Address",
            Self::Token0Decimals => "token0Decimals",
            Self::Token0Symbol => "token0Symbol",
            Self::Token1Address => "token1Address",
            Self::Token1Decimals => "token1Decimals",
            Self::Token1Symbol => "token1Symbol",
            Self::FeeTier => "feeTier",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VaultAddress => "Vault Address",
            Self::Token0Address => "Token 0 Address",
            Self::Token0Decimals => "Token 0 Decimals",
            Self::Token0Symbol => "Token 0 Symbol",
            Self::Token1Address => "Token 1 Address",
            Self::Token1Decimals => "Token 1 Decimals",
            Self::Token1Symbol => "Token 1 Symbol",
            Self::FeeTier => "Fee Tier",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverviewField {
    SumToken0,
    SumToken1,
    Liquidity0,
    Liquidity1,
    UnclaimedFee0,
    UnclaimedFee1,
    Leftover0,
    Leftover1,
}

impl OverviewField {
    pub const ALL: [OverviewField; 8] = [
        OverviewField::SumToken0,
        OverviewField::SumToken1,
        OverviewField::Liquidity0,
        OverviewField::Liquidity1,
        OverviewField::UnclaimedFee0,
        OverviewField::UnclaimedFee1,
        OverviewField::Leftover0,
        OverviewField::Leftover1,
    ];

    /// JSON key; the fee keys are all lower case on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            Self::SumToken0 => "sumToken0",
            Self::SumToken1 => "sumToken1",
            Self::Liquidity0 => "liquidity0",
            Self::Liquidity1 => "liquidity1",
            Self::UnclaimedFee0 => "unclaimedfee0",
            Self::UnclaimedFee1 => "unclaimedfee1",
            Self::Leftover0 => "leftover0",
            Self::Leftover1 => "leftover1",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SumToken0 => "Sum Token 0",
            Self::SumToken1 => "Sum Token 1",
            Self::Liquidity0 => "Liquidity 0",
            Self::Liquidity1 => "Liquidity 1",
            Self::UnclaimedFee0 => "Unclaimed Fee 0",
            Self::UnclaimedFee1 => "Unclaimed Fee 1",
            Self::Leftover0 => "Leftover 0",
            Self::Leftover1 => "Leftover 1",
        }
    }
}
